use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use petition_words::{DEFAULT_MAX_LIMIT, PetitionProcessor, Session};

const OUTPUT_FILE: &str = "output_data.csv";
const WORD_LENGTH: usize = 5;

/// Count the most frequent petition title words and write them as CSV columns.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Petition JSON file inside the data/ directory
    #[arg(default_value = "input_data.json")]
    input: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("petition_words=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let session = Session::builder().build()?;

    let processor = PetitionProcessor::new(&session, &cli.input)
        .with_context(|| format!("loading {}", session.data_path(&cli.input).display()))?;
    processor
        .run(WORD_LENGTH, DEFAULT_MAX_LIMIT, OUTPUT_FILE)
        .with_context(|| format!("processing {}", session.data_path(&cli.input).display()))?;

    session.close();
    Ok(())
}
