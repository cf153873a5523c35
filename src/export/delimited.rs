use std::{
    fs,
    path::{Path, PathBuf},
};

use super::join_records;
use crate::core::{Flashcard, MazoError};

/// Write the deck as one flat text file of `front/back` records.
pub fn write_delimited(cards: &[Flashcard], path: &Path) -> Result<PathBuf, MazoError> {
    let records: Vec<String> =
        cards.iter().map(|card| format!("{}/{}", card.front, card.back)).collect();
    fs::write(path, join_records(records))?;

    Ok(path.to_path_buf())
}
