use crate::cli::commands::{ask_confirmation, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionManager;
use crate::core::system::SystemMode;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes
            && !ask_confirmation("Delete ALL live accounts? This action is irreversible.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = open_store(cfg)?;
        let mode = SystemMode::new(&store);
        mode.reset_real_users()?;

        // a live session for a deleted account is discarded here
        SessionManager::new(&store).current_session()?;

        success("All live accounts have been deleted.");
    }

    Ok(())
}
