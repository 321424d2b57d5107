use crate::cli::commands::{boot, open_store, require_shell};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assistant::{self, generate_assistant_response};
use crate::core::dashboard::Summary;
use crate::core::hotel::HotelData;
use crate::errors::AppResult;
use crate::utils::formatting::wrap_text;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ask { prompt } = cmd {
        let store = open_store(cfg)?;
        let state = boot(&store, cfg)?;
        let ctx = require_shell(&state)?;

        let data = HotelData::load(&store, ctx.is_demo)?;
        let context = Summary::compute(&data).context_string(&data);

        let backend = assistant::from_config(cfg.assistant);
        let reply = generate_assistant_response(backend.as_ref(), &prompt.join(" "), &context);

        println!("✨ {}", wrap_text(&reply, 76));
    }

    Ok(())
}
