//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod chao;
pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenise IPA text into phoneme tokens
    #[command(visible_alias = "tokenize")]
    Tokenise(process::ProcessArgs),

    /// Tokenise IPA text and merge the tokens into consonant and vowel clusters
    #[command(visible_alias = "clusterize")]
    Clusterise(process::ProcessArgs),

    /// Convert numeric tone notation into Chao tone letters
    Chao(chao::ChaoArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenise(args) => args.execute(process::Mode::Tokens),
            Commands::Clusterise(args) => args.execute(process::Mode::Clusters),
            Commands::Chao(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::Chao(chao::ChaoArgs {
            input: vec!["tones.txt".to_string()],
            output: None,
            inverse: false,
            quiet: true,
            verbose: 0,
        });

        let debug_str = format!("{:?}", cmd);
        assert!(debug_str.contains("Chao"));
        assert!(debug_str.contains("tones.txt"));
    }
}
