//! credentry: an interactive account-record builder.

pub mod cli;
pub mod console;
pub mod encoding;
pub mod error;
pub mod generator;
pub mod interactive;
pub mod models;
pub mod operations;
pub mod utils;

// Re-export commonly used types
pub use console::{Console, ScriptedConsole, StdioConsole};
pub use error::{AccountError, Result};
pub use models::{AccountRecord, RecordSummary, SecurityQuestion};
