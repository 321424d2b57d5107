use crate::cli::commands::status::{mode_label, print_view};
use crate::cli::commands::{ask_confirmation, boot, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mode { demo, live, yes } = cmd {
        let store = open_store(cfg)?;
        let mut state = boot(&store, cfg)?;

        let target = match (*demo, *live) {
            (true, _) => true,
            (_, true) => false,
            _ => {
                println!("🏨 Mode: {}", mode_label(state.is_demo()));
                return Ok(());
            }
        };

        if target == state.is_demo() {
            info(format!("Already in {} mode.", mode_label(target)));
            return Ok(());
        }

        let prompt = if target {
            "Switch to Demo Mode? This will load sample data. You will be logged out."
        } else {
            "Turn off Demo Mode? You will need to configure the system and create real accounts. You will be logged out."
        };

        if !*yes && !ask_confirmation(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        state.switch_mode(target)?;
        success(format!("Switched to {} mode. Session ended.", mode_label(target)));
        print_view(&state);
    }

    Ok(())
}
