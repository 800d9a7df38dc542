use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ExportArgs, ImportArgs, ProfileCommands, RoutineCommands, ScheduleCommands, SessionCommands};

/// Stride: a workout rotation tracker
///
/// Stride keeps a library of workout routines, a history of logged sessions
/// and a day-by-day schedule derived from both. The schedule is recomputed
/// after every change: past days show what was actually done, future days
/// continue the rotation from the last session. It can also run as an MCP
/// (Model Context Protocol) server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/stride/stride.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// IANA time zone that defines calendar days (e.g. America/Sao_Paulo).
    /// Defaults to the system time zone
    #[arg(long, global = true)]
    pub time_zone: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Stride CLI
///
/// Without a command, Stride prints the overview.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage routines
    #[command(alias = "r")]
    Routine {
        #[command(subcommand)]
        command: RoutineCommands,
    },
    /// Log and review workout sessions
    #[command(alias = "s")]
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// View and adjust the schedule
    #[command(alias = "sc")]
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// View and update the athlete profile
    #[command(alias = "p")]
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Show today's plan, the next workout and training totals
    #[command(alias = "o")]
    Overview,
    /// Write all data to a JSON file
    Export(ExportArgs),
    /// Replace all data with a JSON file written by `export`
    Import(ImportArgs),
    /// Start the MCP server
    Serve,
}
