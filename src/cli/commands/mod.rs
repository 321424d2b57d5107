pub mod ask;
pub mod bookings;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod guests;
pub mod init;
pub mod log;
pub mod mode;
pub mod reset;
pub mod rooms;
pub mod session;
pub mod setup;
pub mod status;

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::config::Config;
use crate::core::router::{AppState, ShellContext, View};
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::ui::messages::warning;

pub(crate) fn open_store(cfg: &Config) -> AppResult<Store> {
    Store::open(&cfg.database)
}

pub(crate) fn boot<'a>(store: &'a Store, cfg: &Config) -> AppResult<AppState<'a>> {
    AppState::boot(store, Duration::from_millis(cfg.login_latency_ms))
}

/// The authorized shell, or the reason it is not reachable.
pub(crate) fn require_shell(state: &AppState<'_>) -> AppResult<ShellContext> {
    match state.view() {
        View::Authorized(ctx) => Ok(ctx),
        View::Setup => Err(AppError::SetupRequired),
        View::Login | View::Loading => Err(AppError::NotSignedIn),
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Prompt for one line of input. `None` on end of input.
pub(crate) fn prompt_line(input: &mut impl BufRead, label: &str) -> AppResult<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
