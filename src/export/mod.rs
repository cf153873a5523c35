pub mod batches;
pub mod concept_files;
pub mod delimited;
pub mod table;

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::{core::MazoError, deck::Deck, workbook::Workbook};

pub const DEFAULT_BATCH_SIZE: usize = 20;

/// The four deck layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Two-column CSV importable into a spreadsheet or a card app.
    Table,
    /// One flat text file of `front/back` records.
    Delimited,
    /// One text file per concept.
    Concepts,
    /// Shuffled fixed-size study batches.
    Batches,
}

/// Write the deck to `output` in the requested layout and report every
/// file created. `output` names a file for the single-file layouts and
/// a directory for the multi-file ones.
pub fn write_deck<R: Rng>(
    mode: OutputMode,
    deck: &Deck,
    workbook: &Workbook,
    output: &Path,
    batch_size: usize,
    rng: &mut R,
) -> Result<Vec<PathBuf>, MazoError> {
    match mode {
        OutputMode::Table => table::write_table(&deck.cards, output).map(|path| vec![path]),
        OutputMode::Delimited => {
            delimited::write_delimited(&deck.cards, output).map(|path| vec![path])
        }
        OutputMode::Concepts => {
            concept_files::write_concept_files(&deck.cards, &workbook.concepts, output)
        }
        OutputMode::Batches => batches::write_batches(&deck.cards, output, batch_size, rng),
    }
}

/// Join records with the `;` terminator: one between every pair, one
/// after the last.
pub(crate) fn join_records(records: Vec<String>) -> String {
    let mut text = records.join(";\n");
    text.push(';');
    text
}
