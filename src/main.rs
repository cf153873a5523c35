use std::{path::PathBuf, process};

use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};

use mazo::{
    core::MazoError,
    deck::Deck,
    export::{self, OutputMode},
    workbook::Workbook,
};

#[derive(Parser)]
#[command(name = "mazo", version, about = "Turn a course workbook into flashcard decks")]
struct Cli {
    /// Directory holding the workbook sheets as CSV files
    workbook: PathBuf,

    /// Output file (table, delimited) or directory (concepts, batches)
    output: PathBuf,

    /// Deck layout to write
    #[arg(long, value_enum, default_value = "table")]
    format: Format,

    /// Cards per batch file (batches layout only)
    #[arg(long, default_value_t = export::DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Shuffle seed, for reproducible batches
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Delimited,
    Concepts,
    Batches,
}

impl From<Format> for OutputMode {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => OutputMode::Table,
            Format::Delimited => OutputMode::Delimited,
            Format::Concepts => OutputMode::Concepts,
            Format::Batches => OutputMode::Batches,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("{}", error);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), MazoError> {
    if cli.batch_size == 0 {
        return Err(MazoError::Custom("--batch-size must be at least 1".to_string()));
    }

    let workbook = Workbook::load(&cli.workbook)?;
    println!(
        "Loaded {} concepts, {} examples and {} join rows from {}",
        workbook.concepts.len(),
        workbook.examples.len(),
        workbook.example_concepts.len(),
        cli.workbook.display()
    );

    let deck = Deck::build(&workbook);
    println!(
        "Built {} flashcards ({} join rows dropped)",
        deck.cards.len(),
        deck.skipped_rows.len()
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let written = export::write_deck(
        cli.format.into(),
        &deck,
        &workbook,
        &cli.output,
        cli.batch_size,
        &mut rng,
    )?;
    for path in &written {
        println!("Flashcards saved to {}", path.display());
    }

    Ok(())
}
