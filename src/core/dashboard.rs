//! Headline figures for the dashboard and the assistant context.

use std::collections::BTreeMap;

use crate::core::hotel::HotelData;
use crate::models::booking::BookingStatus;
use crate::models::room::RoomStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_rooms: usize,
    pub by_status: BTreeMap<&'static str, usize>,
    /// Occupied rooms over all rooms, in percent (0 when there are no rooms).
    pub occupancy: f64,
    pub checked_in: usize,
    pub paid_revenue: u64,
    pub vip_guests: usize,
}

impl Summary {
    pub fn compute(data: &HotelData) -> Self {
        let mut by_status = BTreeMap::new();
        for status in RoomStatus::ALL {
            let n = data.rooms.iter().filter(|r| r.status == status).count();
            by_status.insert(status.label(), n);
        }

        let total_rooms = data.rooms.len();
        let occupied = by_status
            .get(RoomStatus::Occupied.label())
            .copied()
            .unwrap_or(0);
        let occupancy = if total_rooms == 0 {
            0.0
        } else {
            occupied as f64 * 100.0 / total_rooms as f64
        };

        Self {
            total_rooms,
            by_status,
            occupancy,
            checked_in: data
                .bookings
                .iter()
                .filter(|b| b.status == BookingStatus::CheckedIn)
                .count(),
            paid_revenue: data
                .bookings
                .iter()
                .filter(|b| b.paid)
                .map(|b| u64::from(b.total_amount))
                .sum(),
            vip_guests: data.guests.iter().filter(|g| g.vip).count(),
        }
    }

    /// One-paragraph state description handed to the assistant.
    pub fn context_string(&self, data: &HotelData) -> String {
        let needs_attention: Vec<&str> = data
            .rooms
            .iter()
            .filter(|r| r.status == RoomStatus::Maintenance)
            .map(|r| r.number.as_str())
            .collect();

        let mut ctx = format!(
            "Current hotel occupancy is {:.0}% across {} rooms. {} bookings are checked in. We have {} VIP guests on file.",
            self.occupancy, self.total_rooms, self.checked_in, self.vip_guests
        );
        if !needs_attention.is_empty() {
            ctx.push_str(&format!(
                " Rooms requiring maintenance: {}.",
                needs_attention.join(", ")
            ));
        }
        ctx
    }
}
