//! Fixed data set served in demo mode. Never persisted.

use chrono::NaiveDate;

use crate::models::booking::{Booking, BookingStatus};
use crate::models::guest::Guest;
use crate::models::room::{Room, RoomStatus};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn guest(id: &str, name: &str, email: &str, phone: &str, vip: bool, notes: &str, last: NaiveDate) -> Guest {
    Guest {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        vip,
        notes: notes.into(),
        last_stay: last,
    }
}

fn room(
    number: &str,
    room_type: &str,
    price: u32,
    status: RoomStatus,
    floor: u32,
    capacity: u32,
    features: &[&str],
) -> Room {
    Room {
        id: format!("r{}", number),
        number: number.into(),
        room_type: room_type.into(),
        floor,
        capacity,
        price,
        status,
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: &str,
    guest_id: &str,
    room_id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: BookingStatus,
    total_amount: u32,
    paid: bool,
    guests_count: u32,
) -> Booking {
    Booking {
        id: id.into(),
        guest_id: guest_id.into(),
        room_id: room_id.into(),
        check_in,
        check_out,
        status,
        total_amount,
        paid,
        guests_count,
    }
}

pub fn guests() -> Vec<Guest> {
    vec![
        guest("g1", "Alice Freeman", "alice.f@example.com", "+1 555-0101", true, "Prefers high floor", day(2023, 11, 15)),
        guest("g2", "Bob Smith", "bob.smith@example.com", "+1 555-0102", false, "", day(2023, 10, 1)),
        guest("g3", "Charlie Davis", "charlie.d@example.com", "+1 555-0103", false, "Allergic to peanuts", day(2023, 12, 20)),
        guest("g4", "Diana Prince", "diana.p@example.com", "+1 555-0104", true, "Requires quiet room", day(2024, 1, 10)),
        guest("g5", "Evan Wright", "evan.w@example.com", "+1 555-0105", false, "Late check-in", day(2023, 9, 5)),
    ]
}

pub fn rooms() -> Vec<Room> {
    use RoomStatus::*;
    vec![
        room("101", "Deluxe King", 250, Occupied, 1, 2, &["Ocean View", "Balcony"]),
        room("102", "Standard Queen", 150, Available, 1, 2, &["Garden View"]),
        room("103", "Suite", 450, Dirty, 1, 4, &["Jacuzzi", "Ocean View", "Living Room"]),
        room("201", "Standard Twin", 140, Available, 2, 2, &[]),
        room("202", "Deluxe King", 260, Maintenance, 2, 2, &["High Floor"]),
        room("203", "Suite", 460, Occupied, 2, 4, &["Corner Room", "City View"]),
        room("301", "Penthouse", 1200, Available, 3, 6, &["Private Pool", "Butler Service"]),
    ]
}

pub fn bookings() -> Vec<Booking> {
    use BookingStatus::*;
    vec![
        booking("b1", "g1", "r101", day(2024, 5, 20), day(2024, 5, 25), CheckedIn, 1250, true, 2),
        booking("b2", "g2", "r102", day(2024, 6, 1), day(2024, 6, 3), Confirmed, 300, false, 1),
        booking("b3", "g3", "r103", day(2024, 5, 18), day(2024, 5, 22), CheckedOut, 1800, true, 3),
        booking("b4", "g4", "r203", day(2024, 5, 21), day(2024, 5, 28), CheckedIn, 3220, true, 2),
    ]
}
