use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::system::SystemMode;
use crate::errors::AppResult;
use crate::store::Store;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite store and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing StaySync…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Store      : {}", &db_path);

    let store = Store::open(&db_path)?;
    println!("✅ Store initialized at {}", &db_path);

    store.audit("init", "", &format!("Store initialized at {}", &db_path));

    let mode = SystemMode::new(&store);
    if mode.is_demo_mode()? {
        println!("🎭 Demo mode is active: sign in with any credentials to explore sample data.");
    } else if mode.needs_setup()? {
        println!("🛠️  Live mode needs configuration: run `staysync setup`.");
    }

    println!("🎉 StaySync initialization completed!");
    Ok(())
}
