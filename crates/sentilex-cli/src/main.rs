use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod config;
mod score;


#[derive(Debug, Parser)]
#[command(name = "sentilex")]
#[command(about = "Lexicon sentiment scoring from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a message against a lexicon file
    Score {
        /// Message to score; read from stdin when omitted
        message: Option<String>,

        /// Lexicon JSON file: {"negative": {..}, "positive": {..}}.
        /// Falls back to SENTILEX_LEXICON_PATH; empty lexicon when neither is set
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Drop http/https URLs from the message before scoring
        #[arg(long)]
        strip_urls: bool,
    },
    /// Print the tokens the default tokenizer produces for a message
    Tokens {
        /// Message to tokenize; read from stdin when omitted
        message: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Score {
            message,
            lexicon,
            strip_urls,
        } => score::run_score(message, lexicon.as_deref(), strip_urls),
        Commands::Tokens { message } => score::run_tokens(message),
    }
}
