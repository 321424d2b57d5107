//! List filtering for the booking, guest and room views.

use crate::models::booking::Booking;
use crate::models::guest::Guest;
use crate::models::room::{Room, RoomStatus};

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Bookings whose guest name or booking id contains `term` (case-insensitive).
/// An empty term keeps every booking.
pub fn filter_bookings<'a>(
    bookings: &'a [Booking],
    guests: &[Guest],
    term: &str,
) -> Vec<&'a Booking> {
    let needle = term.trim().to_lowercase();
    bookings
        .iter()
        .filter(|b| {
            let by_guest = guests
                .iter()
                .find(|g| g.id == b.guest_id)
                .is_some_and(|g| matches(&g.name, &needle));
            by_guest || matches(&b.id, &needle)
        })
        .collect()
}

/// Guests whose name or email contains `term` (case-insensitive).
pub fn filter_guests<'a>(guests: &'a [Guest], term: &str) -> Vec<&'a Guest> {
    let needle = term.trim().to_lowercase();
    guests
        .iter()
        .filter(|g| matches(&g.name, &needle) || matches(&g.email, &needle))
        .collect()
}

pub fn filter_rooms(rooms: &[Room], status: Option<RoomStatus>, floor: Option<u32>) -> Vec<&Room> {
    rooms
        .iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .filter(|r| floor.is_none_or(|f| r.floor == f))
        .collect()
}
