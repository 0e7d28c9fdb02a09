use clap::{Parser, Subcommand};

/// Command-line interface definition for rLogout
/// CLI application to find out when the working day is over
#[derive(Parser)]
#[command(
    name = "rlogout",
    version = env!("CARGO_PKG_VERSION"),
    about = "Calculate your logout time from the time already worked and your last break",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
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
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Calculate the logout time once
    Calc {
        /// Working time already completed (HH:MM)
        #[arg(long = "completed", help = "Working time already completed (HH:MM)")]
        completed: Option<String>,

        /// Time of the last break (HH:MM)
        #[arg(long = "break", help = "Time of the last break (HH:MM)")]
        last_break: Option<String>,

        #[arg(
            long = "policy",
            help = "Required work duration, e.g. 8h30m, 8h, 45m or 08:30 (default from config)"
        )]
        policy: Option<String>,

        #[arg(long = "wrap", help = "Wrap the displayed hours into a single day (mod 24)")]
        wrap: bool,

        #[arg(long = "suffix", help = "Label appended to the displayed time (default from config)")]
        suffix: Option<String>,

        #[arg(long = "no-suffix", conflicts_with = "suffix", help = "Do not append any label")]
        no_suffix: bool,

        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },

    /// Interactive session: set inputs, calculate and reset from stdin
    Session {
        #[arg(
            long = "policy",
            help = "Required work duration, e.g. 8h30m (default from config)"
        )]
        policy: Option<String>,

        #[arg(long = "wrap", help = "Wrap the displayed hours into a single day (mod 24)")]
        wrap: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
