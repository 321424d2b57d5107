use crate::cli::commands::{boot, open_store, require_shell};
use crate::cli::parser::{Commands, GuestsAction};
use crate::config::Config;
use crate::core::assistant;
use crate::core::hotel::HotelData;
use crate::core::mail::{EmailComposer, LogMailer};
use crate::core::search::filter_guests;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{RESET, YELLOW};
use crate::utils::formatting::wrap_text;
use crate::utils::table::{Column, Table};

const WRAP_WIDTH: usize = 76;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Guests { action } = cmd else {
        return Ok(());
    };

    let store = open_store(cfg)?;
    let state = boot(&store, cfg)?;
    let ctx = require_shell(&state)?;
    let data = HotelData::load(&store, ctx.is_demo)?;

    match action {
        GuestsAction::List { search } => {
            let found = filter_guests(&data.guests, search.as_deref().unwrap_or(""));
            if found.is_empty() {
                info("No guests found.");
                return Ok(());
            }

            let mut table = Table::new(
                ["Id", "Name", "Email", "Phone", "Last stay", "Notes"]
                    .into_iter()
                    .map(Column::new)
                    .collect(),
            );
            for g in found {
                let name = if g.vip {
                    format!("{} {YELLOW}★{RESET}", g.name)
                } else {
                    g.name.clone()
                };
                table.add_row(vec![
                    g.id.clone(),
                    name,
                    g.email.clone(),
                    g.phone.clone(),
                    g.last_stay.to_string(),
                    g.notes.clone(),
                ]);
            }
            print!("{}", table.render());
        }
        GuestsAction::Draft { guest, kind } | GuestsAction::Send { guest, kind } => {
            let selected = data
                .guest(guest)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("guest '{}'", guest)))?;

            let drafter = assistant::from_config(cfg.assistant);
            let mut composer = EmailComposer::new(selected);
            composer.generate(drafter.as_ref(), *kind);

            header(format!("Draft for {} <{}>", composer.guest.name, composer.guest.email));
            println!("{}\n", wrap_text(&composer.draft, WRAP_WIDTH));
            if let Some(reason) = composer.drafting.failure() {
                warning(format!("Draft unavailable: {}", reason));
            }

            if matches!(action, GuestsAction::Send { .. }) {
                let notice = composer.send(&LogMailer::new(&store))?;
                if composer.sending.failure().is_some() {
                    warning(notice);
                } else {
                    success(notice);
                }
            }
        }
    }

    Ok(())
}
