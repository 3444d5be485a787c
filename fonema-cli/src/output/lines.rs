//! One-token-per-line output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};

/// Lines formatter - every token on its own line
pub struct LinesFormatter<W: Write> {
    writer: W,
}

impl<W: Write> LinesFormatter<W> {
    /// Create a new lines formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl LinesFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for LinesFormatter<W> {
    fn format_line(&mut self, _line: &str, tokens: &[String]) -> Result<()> {
        for token in tokens {
            writeln!(self.writer, "{token}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
