pub mod assistant;
pub mod audit;
pub mod dashboard;
pub mod hotel;
pub mod mail;
pub mod request;
pub mod router;
pub mod sample;
pub mod search;
pub mod session;
pub mod setup;
pub mod system;
