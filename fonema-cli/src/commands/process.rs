//! Tokenise and clusterise command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use fonema_core::{IpaTokeniser, TokeniserConfig};

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, LinesFormatter, OutputFormatter, TextFormatter};

/// Arguments shared by the tokenise and clusterise commands
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Reject symbols outside the strict IPA chart
    #[arg(long)]
    pub strict: bool,

    /// Replace common non-IPA substitutes before tokenising
    #[arg(long)]
    pub replace: bool,

    /// Merge adjacent vowel tokens that form diphthongs
    #[arg(long)]
    pub diphthongs: bool,

    /// Keep tone marks instead of discarding them
    #[arg(long)]
    pub tones: bool,

    /// Emit unclassifiable symbols as single-character tokens
    #[arg(long)]
    pub unknown: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tokens of each input line, space-separated, one line per line
    Text,
    /// Every token on its own line
    Lines,
    /// JSON array with one record per input line
    Json,
}

/// What the shared processing loop should produce
#[derive(Debug, Clone, Copy)]
pub enum Mode {
    /// Phoneme tokens
    Tokens,
    /// Consonant and vowel clusters
    Clusters,
}

impl ProcessArgs {
    /// Execute the command in the given mode
    pub fn execute(&self, mode: Mode) -> Result<()> {
        self.init_logging();

        log::info!("Starting IPA processing");
        log::debug!("Arguments: {:?}", self);

        let tokeniser = IpaTokeniser::with_config(self.tokeniser_config());
        let mut formatter = self.formatter()?;

        for (source, text) in self.read_inputs()? {
            log::info!("Processing {source}");

            for (number, line) in text.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let tokens = match mode {
                    Mode::Tokens => tokeniser.tokenise(line),
                    Mode::Clusters => tokeniser.clusterise(line),
                }
                .map_err(|e| CliError::TokenisationError(e.to_string()))
                .with_context(|| format!("{source}, line {}", number + 1))?;

                formatter.format_line(line, &tokens)?;
            }
        }

        formatter.finish()?;
        Ok(())
    }

    /// The core flag set selected by the command line
    fn tokeniser_config(&self) -> TokeniserConfig {
        TokeniserConfig::builder()
            .strict(self.strict)
            .replace(self.replace)
            .diphthongs(self.diphthongs)
            .tones(self.tones)
            .unknown(self.unknown)
            .build()
    }

    /// Collect (source label, content) pairs from files or stdin
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

    fn formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Lines => Box::new(LinesFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
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
