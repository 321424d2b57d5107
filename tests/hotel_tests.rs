mod common;
use common::memory_store;

use staysync::core::dashboard::Summary;
use staysync::core::hotel::{
    DEMO_READ_ONLY, DenyReason, HotelData, NewRoom, RoomChange, add_room, remove_room,
};
use staysync::core::router::ShellContext;
use staysync::core::sample;
use staysync::core::search::{filter_bookings, filter_guests, filter_rooms};
use staysync::core::system::SystemMode;
use staysync::errors::AppError;
use staysync::models::role::Role;
use staysync::models::room::RoomStatus;
use staysync::models::user::Session;

fn ctx(role: Option<Role>, is_demo: bool) -> ShellContext {
    ShellContext {
        session: Session {
            user_id: "u1".into(),
            email: "u1@h.test".into(),
            display_name: "U One".into(),
            role,
        },
        is_demo,
    }
}

fn new_room(number: &str) -> NewRoom {
    NewRoom {
        number: number.into(),
        room_type: "Suite".into(),
        floor: 4,
        capacity: 3,
        price: 300,
        status: RoomStatus::Available,
        features: vec!["Balcony".into()],
    }
}

#[test]
fn demo_data_is_the_sample_set() {
    let store = memory_store();
    let data = HotelData::load(&store, true).unwrap();

    assert_eq!(data.rooms.len(), 7);
    assert_eq!(data.guests.len(), 5);
    assert_eq!(data.bookings.len(), 4);
    assert_eq!(data.guest("g4").map(|g| g.name.as_str()), Some("Diana Prince"));
    assert!(data.room("r999").is_none());
}

#[test]
fn live_data_reads_persisted_rooms_only() {
    let store = memory_store();
    SystemMode::new(&store).save_real_rooms(&sample::rooms()[..2]).unwrap();

    let data = HotelData::load(&store, false).unwrap();

    assert_eq!(data.rooms.len(), 2);
    assert!(data.bookings.is_empty());
    assert!(data.guests.is_empty());
}

#[test]
fn demo_mode_denies_room_changes_before_role_check() {
    let store = memory_store();

    let added = add_room(&store, &ctx(Some(Role::Manager), true), new_room("401")).unwrap();
    let removed = remove_room(&store, &ctx(None, true), "101").unwrap();

    assert_eq!(added, RoomChange::Denied(DenyReason::DemoMode));
    assert_eq!(removed, RoomChange::Denied(DenyReason::DemoMode));
    assert_eq!(DenyReason::DemoMode.message(), DEMO_READ_ONLY);
    assert!(SystemMode::new(&store).real_rooms().unwrap().is_empty());
}

#[test]
fn session_without_role_is_denied() {
    let store = memory_store();
    let change = add_room(&store, &ctx(None, false), new_room("401")).unwrap();
    assert_eq!(change, RoomChange::Denied(DenyReason::Role));
}

#[test]
fn live_manager_adds_and_removes_rooms() {
    let store = memory_store();
    let manager = ctx(Some(Role::Manager), false);

    let RoomChange::Applied(rooms) = add_room(&store, &manager, new_room("401")).unwrap() else {
        panic!("room add denied");
    };
    assert_eq!(rooms.len(), 1);
    assert!(rooms[0].id.starts_with("room_"));

    let dup = add_room(&store, &manager, new_room("401")).unwrap_err();
    assert!(matches!(dup, AppError::Validation(_)));

    let RoomChange::Applied(rooms) = remove_room(&store, &manager, "401").unwrap() else {
        panic!("room remove denied");
    };
    assert!(rooms.is_empty());

    let missing = remove_room(&store, &manager, "401").unwrap_err();
    assert!(matches!(missing, AppError::NotFound(_)));
}

#[test]
fn added_room_needs_positive_floor_capacity_and_price() {
    let store = memory_store();
    let manager = ctx(Some(Role::Manager), false);

    let zero_floor = NewRoom { floor: 0, ..new_room("001") };
    let zero_capacity = NewRoom { capacity: 0, ..new_room("402") };
    let free = NewRoom { price: 0, ..new_room("403") };
    let too_high = NewRoom { floor: 51, ..new_room("5101") };

    for bad in [zero_floor, zero_capacity, free, too_high] {
        assert!(matches!(
            add_room(&store, &manager, bad),
            Err(AppError::Validation(_))
        ));
    }
    assert!(SystemMode::new(&store).real_rooms().unwrap().is_empty());
}

#[test]
fn search_is_case_insensitive() {
    let bookings = sample::bookings();
    let guests = sample::guests();

    let by_name: Vec<&str> = filter_bookings(&bookings, &guests, "ALICE")
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(by_name, ["b1"]);

    let by_id = filter_bookings(&bookings, &guests, "b3");
    assert_eq!(by_id.len(), 1);
    assert_eq!(filter_bookings(&bookings, &guests, "").len(), 4);

    assert_eq!(filter_guests(&guests, "example.com").len(), 5);
    assert_eq!(filter_guests(&guests, "prince").len(), 1);

    let rooms = sample::rooms();
    assert_eq!(filter_rooms(&rooms, Some(RoomStatus::Available), None).len(), 3);
    assert_eq!(filter_rooms(&rooms, None, Some(2)).len(), 3);
    assert_eq!(filter_rooms(&rooms, Some(RoomStatus::Occupied), Some(1)).len(), 1);
}

#[test]
fn dashboard_summary_of_demo_data() {
    let store = memory_store();
    let data = HotelData::load(&store, true).unwrap();
    let summary = Summary::compute(&data);

    assert_eq!(summary.total_rooms, 7);
    assert_eq!(summary.by_status["Occupied"], 2);
    assert_eq!(summary.by_status["Cleaning"], 1);
    assert_eq!(summary.checked_in, 2);
    assert_eq!(summary.paid_revenue, 1250 + 1800 + 3220);
    assert_eq!(summary.vip_guests, 2);

    let context = summary.context_string(&data);
    assert!(context.starts_with("Current hotel occupancy is 29% across 7 rooms."));
    assert!(context.contains("Rooms requiring maintenance: 202."));
}

#[test]
fn empty_live_summary_has_zero_occupancy() {
    let store = memory_store();
    let data = HotelData::load(&store, false).unwrap();
    assert_eq!(Summary::compute(&data).occupancy, 0.0);
}
