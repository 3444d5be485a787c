//! fonema command-line entry point

use clap::Parser;

use fonema_cli::commands::Commands;

/// Tokenise IPA transcriptions into phoneme tokens
#[derive(Debug, Parser)]
#[command(name = "fonema", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = cli.command.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
