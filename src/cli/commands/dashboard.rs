use crate::cli::commands::{boot, open_store, require_shell};
use crate::config::Config;
use crate::core::dashboard::Summary;
use crate::core::hotel::HotelData;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::formatting::{bold, money};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let state = boot(&store, cfg)?;
    let ctx = require_shell(&state)?;

    let data = HotelData::load(&store, ctx.is_demo)?;
    let summary = Summary::compute(&data);

    header(if ctx.is_demo {
        "Dashboard (demo data)"
    } else {
        "Dashboard"
    });

    println!("{}• Rooms:{} {}", CYAN, RESET, bold(&summary.total_rooms.to_string()));
    for (label, count) in &summary.by_status {
        println!("    {:<12} {}", label, count);
    }
    println!("{}• Occupancy:{} {:.0}%", CYAN, RESET, summary.occupancy);
    println!("{}• Checked in:{} {}", CYAN, RESET, summary.checked_in);
    println!(
        "{}• Paid revenue:{} {}",
        CYAN,
        RESET,
        money(summary.paid_revenue)
    );
    println!("{}• VIP guests:{} {}", CYAN, RESET, summary.vip_guests);

    Ok(())
}
