//! Chao tone letter conversion command

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use fonema_core::replace_digits_with_chao;

use crate::input::{resolve_patterns, FileReader};

/// Arguments for the chao command
#[derive(Debug, Args)]
pub struct ChaoArgs {
    /// Input files or patterns (supports glob); stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Map digit 1 to the highest tone instead of the lowest
    #[arg(long)]
    pub inverse: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ChaoArgs {
    /// Execute the chao command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Converting tone digits to Chao letters");

        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        for (source, text) in self.read_inputs()? {
            log::info!("Processing {source}");
            write!(writer, "{}", replace_digits_with_chao(&text, self.inverse))?;
        }

        writer.flush()?;
        Ok(())
    }

    fn read_inputs(&self) -> Result<Vec<(String, String)>> {
        if self.input.is_empty() {
            return Ok(vec![("<stdin>".to_string(), FileReader::read_stdin()?)]);
        }

        let mut inputs = Vec::new();
        for path in resolve_patterns(&self.input)? {
            let text = FileReader::read_text(&path)?;
            inputs.push((path.display().to_string(), text));
        }
        Ok(inputs)
    }

    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
