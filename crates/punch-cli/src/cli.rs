//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Personal work-marking log.
///
/// Punches start/finish/doing checkpoints with timestamps, shows the
/// elapsed span between consecutive checkpoints, and exports one summary
/// line per piece of work.
#[derive(Debug, Parser)]
#[command(name = "punch", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Punch a "work started" checkpoint at the current time.
    Start {
        /// Description of the work being started.
        desc: Option<String>,
    },

    /// Punch a "work finished" checkpoint at the current time.
    Finish {
        /// Description of the work just finished.
        desc: Option<String>,
    },

    /// Punch an "in progress" checkpoint at the current time.
    Doing {
        /// Description of the work in progress.
        desc: Option<String>,
    },

    /// Show the log with per-row elapsed spans.
    List,

    /// Insert a placeholder row (start, no time) at the given position.
    ///
    /// Positions past the end of the log clamp to the end.
    Insert {
        /// Zero-based row index.
        index: usize,
    },

    /// Edit a row in place.
    Edit {
        /// Zero-based row index.
        index: usize,

        /// New wall-clock time for today, as HH:mm:ss. Malformed input
        /// leaves the stored time unchanged.
        #[arg(long)]
        time: Option<String>,

        /// New description.
        #[arg(long)]
        desc: Option<String>,

        /// New status: start, finish, or doing.
        #[arg(long)]
        status: Option<String>,
    },

    /// Remove the row at the given position.
    Remove {
        /// Zero-based row index.
        index: usize,
    },

    /// Delete the entire log. Irreversible.
    Reset {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },

    /// Print the aggregated summary, one line per piece of work.
    Export,
}
