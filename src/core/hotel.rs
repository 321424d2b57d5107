//! Data behind the authorized shell and the room mutation gate.

use chrono::Utc;

use crate::core::router::ShellContext;
use crate::core::sample;
use crate::core::setup::MAX_FLOORS;
use crate::core::system::SystemMode;
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::guest::Guest;
use crate::models::room::{Room, RoomStatus};
use crate::store::Store;

pub const DEMO_READ_ONLY: &str = "Cannot modify rooms in Demo Mode.";
pub const ROLE_READ_ONLY: &str = "Your role does not allow room changes.";

#[derive(Debug, Clone)]
pub struct HotelData {
    pub bookings: Vec<Booking>,
    pub guests: Vec<Guest>,
    pub rooms: Vec<Room>,
}

impl HotelData {
    /// Demo mode serves the sample set; live mode the persisted rooms.
    /// Live bookings and guests have no persistence yet and are empty.
    pub fn load(store: &Store, is_demo: bool) -> AppResult<Self> {
        if is_demo {
            return Ok(Self {
                bookings: sample::bookings(),
                guests: sample::guests(),
                rooms: sample::rooms(),
            });
        }

        Ok(Self {
            bookings: Vec::new(),
            guests: Vec::new(),
            rooms: SystemMode::new(store).real_rooms()?,
        })
    }

    pub fn guest(&self, id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == id)
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}

/// Why a room change was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    DemoMode,
    Role,
}

impl DenyReason {
    pub fn message(&self) -> &'static str {
        match self {
            DenyReason::DemoMode => DEMO_READ_ONLY,
            DenyReason::Role => ROLE_READ_ONLY,
        }
    }
}

/// Outcome of a gated room mutation. A refusal is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomChange {
    Applied(Vec<Room>),
    Denied(DenyReason),
}

/// Fields supplied when adding a room by hand.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub number: String,
    pub room_type: String,
    pub floor: u32,
    pub capacity: u32,
    pub price: u32,
    pub status: RoomStatus,
    pub features: Vec<String>,
}

fn gate(ctx: &ShellContext) -> Option<DenyReason> {
    if ctx.is_demo {
        Some(DenyReason::DemoMode)
    } else if !ctx.can_manage_rooms() {
        Some(DenyReason::Role)
    } else {
        None
    }
}

pub fn add_room(store: &Store, ctx: &ShellContext, new_room: NewRoom) -> AppResult<RoomChange> {
    if let Some(reason) = gate(ctx) {
        return Ok(RoomChange::Denied(reason));
    }

    if new_room.number.trim().is_empty() || new_room.room_type.trim().is_empty() {
        return Err(AppError::Validation(
            "room number and type must not be empty".into(),
        ));
    }
    if !(1..=MAX_FLOORS).contains(&new_room.floor) {
        return Err(AppError::Validation(format!(
            "floor must be between 1 and {}",
            MAX_FLOORS
        )));
    }
    if new_room.capacity == 0 || new_room.price == 0 {
        return Err(AppError::Validation(
            "capacity and price must be positive".into(),
        ));
    }

    let mode = SystemMode::new(store);
    let mut rooms = mode.real_rooms()?;
    let number = new_room.number.trim().to_string();
    if rooms.iter().any(|r| r.number == number) {
        return Err(AppError::Validation(format!("room {} already exists", number)));
    }

    rooms.push(Room {
        id: format!("room_{}", Utc::now().timestamp_millis()),
        number: number.clone(),
        room_type: new_room.room_type.trim().to_string(),
        floor: new_room.floor,
        capacity: new_room.capacity,
        price: new_room.price,
        status: new_room.status,
        features: new_room.features,
    });
    mode.save_real_rooms(&rooms)?;
    store.audit("room_add", &number, &format!("Added by {}", ctx.session.email));

    Ok(RoomChange::Applied(rooms))
}

/// Remove a room by id or by room number.
pub fn remove_room(store: &Store, ctx: &ShellContext, key: &str) -> AppResult<RoomChange> {
    if let Some(reason) = gate(ctx) {
        return Ok(RoomChange::Denied(reason));
    }

    let mode = SystemMode::new(store);
    let mut rooms = mode.real_rooms()?;
    let before = rooms.len();
    rooms.retain(|r| r.id != key && r.number != key);

    if rooms.len() == before {
        return Err(AppError::NotFound(format!("room '{}'", key)));
    }

    mode.save_real_rooms(&rooms)?;
    store.audit("room_del", key, &format!("Removed by {}", ctx.session.email));

    Ok(RoomChange::Applied(rooms))
}
