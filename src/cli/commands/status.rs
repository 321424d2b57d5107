use crate::cli::commands::{boot, open_store};
use crate::config::Config;
use crate::core::router::{AppState, View};
use crate::errors::AppResult;
use crate::utils::colors::{GREEN, GREY, MAGENTA, RESET, YELLOW};

pub(crate) fn mode_label(is_demo: bool) -> String {
    if is_demo {
        format!("{YELLOW}demo{RESET}")
    } else {
        format!("{GREEN}live{RESET}")
    }
}

/// Print what the root view currently resolves to.
pub(crate) fn print_view(state: &AppState<'_>) {
    match state.view() {
        View::Loading => println!("⏳ Loading…"),
        View::Setup => println!("🛠️  Setup required: run `staysync setup`"),
        View::Login => println!("🔒 Not signed in: run `staysync login`"),
        View::Authorized(ctx) => {
            let role = ctx
                .session
                .role
                .map(|r| format!("{MAGENTA}{}{RESET}", r))
                .unwrap_or_else(|| format!("{GREY}no role{RESET}"));
            println!(
                "👤 Signed in as {} <{}> ({})",
                ctx.session.display_name, ctx.session.email, role
            );
            if !ctx.can_manage_rooms() || ctx.is_demo {
                println!("   Room inventory is read-only in this session.");
            }
        }
    }
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let state = boot(&store, cfg)?;

    println!("🏨 Mode: {}", mode_label(state.is_demo()));
    print_view(&state);
    Ok(())
}
