//! Command-line interface definitions for dotsync.
//!
//! The CLI definitions are shared between the main binary and build tools
//! (like xtask) for man page generation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for dotsync.
#[derive(Parser)]
#[command(
    name = "dotsync",
    version = crate::VERSION,
    about = "Dotfile synchronizer",
    long_about = "Copies rc files between your home directory and a snapshot directory \
                  (the current directory by default), remembering where each file came from"
)]
pub struct Cli {
    /// Subcommand to execute; without one, a short usage summary is printed
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Home directory to sync with
    #[arg(long, global = true, env = "HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Snapshot directory holding copies and the INDEX (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub snapshot_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, env = "DOTSYNC_CONFIG_PATH", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Install existing files onto this computer from the snapshot directory
    Install,

    /// Save changed rc files into the snapshot directory
    Save {
        /// Accept every changed file without prompting
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Usage summary printed when no subcommand is given.
#[must_use]
pub fn usage() -> String {
    format!(
        "dotsync {}\n\
         \tinstall - install existing files onto computer from the current directory\n\
         \tsave - save existing rc files into the current directory\n",
        crate::VERSION
    )
}
