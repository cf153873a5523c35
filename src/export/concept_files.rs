use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use super::join_records;
use crate::{
    core::{Concept, Flashcard, MazoError},
    deck::{group_by_concept, sanitize_filename},
};

/// Write one text file per concept into `dir`: the shared front as a
/// header line, a blank line, then that concept's backs. Files are
/// named after the sanitized concept title.
pub fn write_concept_files(
    cards: &[Flashcard],
    concepts: &[Concept],
    dir: &Path,
) -> Result<Vec<PathBuf>, MazoError> {
    fs::create_dir_all(dir)?;

    let titles: HashMap<u32, &str> =
        concepts.iter().map(|concept| (concept.id, concept.title.as_str())).collect();

    let mut written = Vec::new();
    for (concept_id, group) in group_by_concept(cards) {
        let title = titles.get(&concept_id).copied().ok_or_else(|| {
            MazoError::Custom(format!("No concept with id {} while writing files", concept_id))
        })?;

        let file_stem = match sanitize_filename(title) {
            stem if stem.is_empty() => format!("concept_{}", concept_id),
            stem => stem,
        };
        let path = dir.join(format!("{}.txt", file_stem));

        let backs: Vec<String> = group.iter().map(|card| card.back.clone()).collect();
        let mut content = group[0].front.clone();
        content.push_str("\n\n");
        content.push_str(&join_records(backs));

        fs::write(&path, content)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(concept_id: u32, front: &str, back: &str) -> Flashcard {
        Flashcard { concept_id, front: front.to_string(), back: back.to_string() }
    }

    fn concept(id: u32, title: &str) -> Concept {
        Concept { id, title: title.to_string(), description: None }
    }

    #[test]
    fn test_one_file_per_concept_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let cards = vec![
            card(1, "Greeting: Basic hello", "B1"),
            card(2, "Farewell", "B3"),
            card(1, "Greeting: Basic hello", "B2"),
        ];
        let concepts = vec![concept(1, "Greeting"), concept(2, "Farewell")];

        let written = write_concept_files(&cards, &concepts, dir.path()).unwrap();
        assert_eq!(written.len(), 2);

        let greeting = std::fs::read_to_string(dir.path().join("Greeting.txt")).unwrap();
        assert_eq!(greeting, "Greeting: Basic hello\n\nB1;\nB2;");

        let farewell = std::fs::read_to_string(dir.path().join("Farewell.txt")).unwrap();
        assert_eq!(farewell, "Farewell\n\nB3;");
    }

    #[test]
    fn test_unusable_title_falls_back_to_concept_id() {
        let dir = tempfile::tempdir().unwrap();
        let cards = vec![card(7, "???", "B1")];
        let concepts = vec![concept(7, "???")];

        let written = write_concept_files(&cards, &concepts, dir.path()).unwrap();
        assert_eq!(written, vec![dir.path().join("concept_7.txt")]);
    }
}
