use crate::models::{DayOfWeek, Interval, ThemeColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for Streaks
/// Terminal habit tracker: habit rows, progress dot grids and a draft editor
#[derive(Parser)]
#[command(
    name = "streaks",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small habit tracker: list habits with progress dot grids and draft new ones",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run in test mode (no config file writes, sequential habit ids)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and a default configuration file
    Init,

    /// Show or edit the configuration file
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

    /// List the habits with their progress
    List {
        #[arg(long = "json", help = "Print the habits as JSON")]
        json: bool,
    },

    /// Draft a new habit and add it to the list
    Add {
        /// Habit title (surrounding whitespace is trimmed)
        title: String,

        #[arg(long, help = "Icon glyph shown next to the title")]
        icon: Option<String>,

        #[arg(long, value_enum, help = "Palette color")]
        color: Option<ThemeColor>,

        #[arg(long, help = "Free-text description")]
        description: Option<String>,

        #[arg(long = "start", value_name = "YYYY-MM-DD", help = "Start date")]
        start: Option<String>,

        #[arg(long, value_enum, help = "Streak interval")]
        interval: Option<Interval>,

        /// Reminder day; repeat to toggle several (a repeated day is deselected)
        #[arg(long = "day", value_enum, value_name = "DAY")]
        days: Vec<DayOfWeek>,

        #[arg(long = "time", value_name = "HH:MM", help = "Reminder time")]
        time: Option<String>,

        #[arg(long = "json", help = "Print the resulting list as JSON")]
        json: bool,
    },

    /// Start an interactive session reading commands from stdin
    Shell,
}
