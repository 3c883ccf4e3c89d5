//! Athlete motivation calculator.
//!
//! Scores seven component ratings with fixed weights, exports the result as
//! CSV or plain text, and ships a command line and a terminal UI front end.

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod output;
pub mod scoring;
pub mod stderr_buffer;
pub mod tui;

pub use error::{Error, Result};
