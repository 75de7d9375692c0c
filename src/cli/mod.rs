//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod session;

pub use commands::{Cli, Commands};
pub use output::{format_chart, format_insights, format_stats, format_suggestion, format_timeline};
pub use session::{run_session, SessionCommand};
