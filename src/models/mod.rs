pub mod booking;
pub mod guest;
pub mod role;
pub mod room;
pub mod user;
