use crate::cli::commands::{boot, open_store, require_shell};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::hotel::HotelData;
use crate::core::search::filter_bookings;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW, color_for_booking_status, colorize};
use crate::utils::formatting::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bookings { search } = cmd {
        let store = open_store(cfg)?;
        let state = boot(&store, cfg)?;
        let ctx = require_shell(&state)?;

        let data = HotelData::load(&store, ctx.is_demo)?;
        let found = filter_bookings(&data.bookings, &data.guests, search.as_deref().unwrap_or(""));

        if found.is_empty() {
            info("No bookings found.");
            return Ok(());
        }

        let mut table = Table::new(
            ["Booking", "Guest", "Room", "Dates", "Nights", "Status", "Amount", "Paid"]
                .into_iter()
                .map(Column::new)
                .collect(),
        );

        for b in found {
            let guest = data
                .guest(&b.guest_id)
                .map(|g| g.name.clone())
                .unwrap_or_else(|| format!("{GREY}unknown{RESET}"));
            let room = data
                .room(&b.room_id)
                .map(|r| r.number.clone())
                .unwrap_or_else(|| b.room_id.clone());
            let paid = if b.paid {
                format!("{GREEN}yes{RESET}")
            } else {
                format!("{YELLOW}no{RESET}")
            };

            table.add_row(vec![
                b.id.clone(),
                guest,
                room,
                format!("{} → {}", b.check_in, b.check_out),
                b.nights().to_string(),
                colorize(b.status.label(), color_for_booking_status(b.status)),
                money(u64::from(b.total_amount)),
                paid,
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
