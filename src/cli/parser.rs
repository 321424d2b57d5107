use crate::core::assistant::EmailKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for StaySync
#[derive(Parser)]
#[command(
    name = "staysync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Hotel operations console: rooms, bookings, guests, with demo and live modes backed by SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or a second property)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the store database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show mode, setup state and the signed-in account
    Status,

    /// Show or switch between demo and live mode (ends the current session)
    Mode {
        #[arg(long, conflicts_with = "live", help = "Switch to demo mode (sample data)")]
        demo: bool,

        #[arg(long, help = "Switch to live mode (local accounts and rooms)")]
        live: bool,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Run the first-time live setup wizard (reads answers from stdin)
    Setup,

    /// Sign in
    Login {
        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,
    },

    /// Sign out
    Logout,

    /// Delete every live account (setup must be run again)
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Room inventory
    Rooms {
        #[command(subcommand)]
        action: RoomsAction,
    },

    /// List bookings
    Bookings {
        #[arg(long, short, help = "Filter by guest name or booking id")]
        search: Option<String>,
    },

    /// Guest directory and messaging
    Guests {
        #[command(subcommand)]
        action: GuestsAction,
    },

    /// Occupancy and revenue summary
    Dashboard,

    /// Ask the operations assistant
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        prompt: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum RoomsAction {
    /// Show the room grid
    List {
        #[arg(long, help = "available, occupied, dirty or maintenance")]
        status: Option<String>,

        #[arg(long)]
        floor: Option<u32>,
    },

    /// Add a room (live mode)
    Add {
        /// Room number, e.g. 305
        number: String,

        #[arg(long = "type", value_name = "TYPE")]
        room_type: String,

        #[arg(long)]
        floor: u32,

        #[arg(long)]
        price: u32,

        #[arg(long, default_value_t = 2)]
        capacity: u32,

        #[arg(long, default_value = "available")]
        status: String,

        #[arg(long = "feature", help = "Feature tag (repeatable)")]
        features: Vec<String>,
    },

    /// Remove a room by id or number (live mode)
    Remove {
        /// Room id or number
        room: String,
    },
}

#[derive(Subcommand)]
pub enum GuestsAction {
    /// List guests
    List {
        #[arg(long, short, help = "Filter by name or email")]
        search: Option<String>,
    },

    /// Draft an email for a guest without sending it
    Draft {
        /// Guest id
        guest: String,

        #[arg(long, value_enum, default_value = "welcome")]
        kind: EmailKind,
    },

    /// Draft and send an email to a guest
    Send {
        /// Guest id
        guest: String,

        #[arg(long, value_enum, default_value = "welcome")]
        kind: EmailKind,
    },
}
