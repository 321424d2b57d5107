use crate::cli::commands::{boot, open_store, require_shell};
use crate::cli::parser::{Commands, RoomsAction};
use crate::config::Config;
use crate::core::hotel::{self, HotelData, NewRoom, RoomChange};
use crate::core::search::filter_rooms;
use crate::errors::{AppError, AppResult};
use crate::models::room::{Room, RoomStatus};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{color_for_room_status, colorize};
use crate::utils::formatting::{feature_digest, money};
use crate::utils::table::{Column, Table};

fn parse_status(code: &str) -> AppResult<RoomStatus> {
    RoomStatus::from_code(code).ok_or_else(|| AppError::InvalidRoomStatus(code.to_string()))
}

fn print_rooms(rooms: &[&Room]) {
    if rooms.is_empty() {
        info("No rooms to show.");
        return;
    }

    let mut table = Table::new(
        ["Room", "Type", "Floor", "Cap.", "Price", "Status", "Features"]
            .into_iter()
            .map(Column::new)
            .collect(),
    );

    for r in rooms {
        table.add_row(vec![
            r.number.clone(),
            r.room_type.clone(),
            r.floor.to_string(),
            r.capacity.to_string(),
            format!("{}/night", money(u64::from(r.price))),
            colorize(r.status.label(), color_for_room_status(r.status)),
            colorize(&feature_digest(&r.features), ""),
        ]);
    }

    print!("{}", table.render());
}

fn report(change: RoomChange, applied: String) {
    match change {
        RoomChange::Applied(rooms) => {
            success(applied);
            info(format!("{} rooms in inventory.", rooms.len()));
        }
        RoomChange::Denied(reason) => warning(reason.message()),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Rooms { action } = cmd else {
        return Ok(());
    };

    let store = open_store(cfg)?;
    let state = boot(&store, cfg)?;
    let ctx = require_shell(&state)?;

    match action {
        RoomsAction::List { status, floor } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            let data = HotelData::load(&store, ctx.is_demo)?;
            print_rooms(&filter_rooms(&data.rooms, status, *floor));
        }
        RoomsAction::Add {
            number,
            room_type,
            floor,
            price,
            capacity,
            status,
            features,
        } => {
            let new_room = NewRoom {
                number: number.clone(),
                room_type: room_type.clone(),
                floor: *floor,
                capacity: *capacity,
                price: *price,
                status: parse_status(status)?,
                features: features.clone(),
            };
            let change = hotel::add_room(&store, &ctx, new_room)?;
            report(change, format!("Room {} added.", number.trim()));
        }
        RoomsAction::Remove { room } => {
            let change = hotel::remove_room(&store, &ctx, room)?;
            report(change, format!("Room {} removed.", room));
        }
    }

    Ok(())
}
