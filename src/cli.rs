//! CLI argument parsing.
use clap::{Parser, Subcommand};

/// Global CLI arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = ".", global = true)]
    /// Repository root: a single package or a monorepo with workspaces.
    pub root: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Changelog operation subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a pending changelog entry for every target package.
    Add {
        #[arg(short, long)]
        /// Description of the change.
        message: String,
    },

    /// Merge pending entries into a versioned changelog block per package.
    Generate,
}
