//! moodjour - Mood journal core
//!
//! Suggests a mood for free-text journal entries from keyword matches, keeps
//! entries in memory for the session, and derives statistics, streaks and
//! insights from them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodjourError;
