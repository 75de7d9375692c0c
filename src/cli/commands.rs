//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodjour")]
#[command(about = "Mood journal with keyword-based mood suggestions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $MOODJOUR_CONFIG or nearest .moodjour.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest a mood for a piece of text
    Classify {
        /// Text to classify
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Start an interactive journaling session reading commands from stdin
    Session {
        /// Seed the session with two sample entries
        #[arg(long)]
        demo: bool,
    },

    /// Show statistics and insights for an exported journal
    Report {
        /// Export file produced by the session `export` command
        file: PathBuf,

        /// Document format (toml, json); guessed from the extension by default
        #[arg(short, long)]
        format: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
