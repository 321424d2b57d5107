/// ANSI color helper utilities for terminal output.
use crate::models::booking::BookingStatus;
use crate::models::room::RoomStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_room_status(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => GREEN,
        RoomStatus::Occupied => BLUE,
        RoomStatus::Dirty => YELLOW,
        RoomStatus::Maintenance => GREY,
    }
}

pub fn color_for_booking_status(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Confirmed => BLUE,
        BookingStatus::CheckedIn => GREEN,
        BookingStatus::CheckedOut => GREY,
        BookingStatus::Cancelled => RED,
    }
}

/// Wrap `value` in `color`, greying out empty values.
pub fn colorize(value: &str, color: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
