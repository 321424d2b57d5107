use crate::cli::commands::{boot, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::router::View;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle `login` and `logout`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let mut state = boot(&store, cfg)?;

    match cmd {
        Commands::Login { email, password } => {
            if state.view() == View::Setup {
                return Err(AppError::SetupRequired);
            }

            let session = state.sign_in(email, password)?;
            let role = session
                .role
                .map(|r| r.to_string())
                .unwrap_or_else(|| "no role".to_string());
            success(format!(
                "Welcome, {} ({})",
                session.display_name, role
            ));
            if state.is_demo() {
                info("Demo mode: any credentials are accepted and data is sample only.");
            }
        }
        Commands::Logout => {
            state.sign_out()?;
            success("Signed out.");
        }
        _ => {}
    }

    Ok(())
}
