use std::path::{Path, PathBuf};

use crate::core::{Flashcard, MazoError};

/// Write the deck as a two-column CSV with a `Front,Back` header. The
/// back of every row carries a trailing `;` so imported cards keep the
/// same record terminator as the text layouts.
pub fn write_table(cards: &[Flashcard], path: &Path) -> Result<PathBuf, MazoError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["Front", "Back"])?;
    for card in cards {
        let back = format!("{};", card.back);
        writer.write_record([card.front.as_str(), back.as_str()])?;
    }
    writer.flush()?;

    Ok(path.to_path_buf())
}
