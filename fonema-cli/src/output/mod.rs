//! Output formatting module

use anyhow::Result;

/// Trait for token output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the tokens produced by one input line
    fn format_line(&mut self, line: &str, tokens: &[String]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod lines;
pub mod text;

pub use json::JsonFormatter;
pub use lines::LinesFormatter;
pub use text::TextFormatter;
