use std::{
    fs,
    path::{Path, PathBuf},
};

use rand::{seq::SliceRandom, Rng};

use super::join_records;
use crate::{
    core::{Flashcard, MazoError},
    deck::chunk,
};

/// Shuffle the deck and write it into `dir` as numbered study batches
/// of at most `size` cards, `batch_1.txt` onward. Each batch is a text
/// file of `front;back` records.
pub fn write_batches<R: Rng>(
    cards: &[Flashcard],
    dir: &Path,
    size: usize,
    rng: &mut R,
) -> Result<Vec<PathBuf>, MazoError> {
    fs::create_dir_all(dir)?;

    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);

    let mut written = Vec::new();
    for (index, batch) in chunk(&shuffled, size).into_iter().enumerate() {
        let records: Vec<String> =
            batch.iter().map(|card| format!("{};{}", card.front, card.back)).collect();
        let path = dir.join(format!("batch_{}.txt", index + 1));
        fs::write(&path, join_records(records))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn cards(count: u32) -> Vec<Flashcard> {
        (0..count)
            .map(|i| Flashcard { concept_id: i, front: format!("F{}", i), back: format!("B{}", i) })
            .collect()
    }

    fn read_records(path: &Path) -> Vec<String> {
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.ends_with(';'));
        content.trim_end_matches(';').split(";\n").map(str::to_string).collect()
    }

    #[test]
    fn test_batches_cover_the_deck_without_loss() {
        let dir = tempfile::tempdir().unwrap();
        let deck = cards(45);
        let mut rng = StdRng::seed_from_u64(7);

        let written = write_batches(&deck, dir.path(), 20, &mut rng).unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(written[0], dir.path().join("batch_1.txt"));
        assert_eq!(written[2], dir.path().join("batch_3.txt"));

        let sizes: Vec<usize> = written.iter().map(|path| read_records(path).len()).collect();
        assert_eq!(sizes, vec![20, 20, 5]);

        let mut fronts: Vec<String> = written
            .iter()
            .flat_map(|path| read_records(path))
            .map(|record| record.split(';').next().unwrap().to_string())
            .collect();
        fronts.sort();

        let mut expected: Vec<String> = (0..45).map(|i| format!("F{}", i)).collect();
        expected.sort();
        assert_eq!(fronts, expected);
    }

    #[test]
    fn test_same_seed_reproduces_the_same_batches() {
        let deck = cards(10);
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        write_batches(&deck, dir_a.path(), 4, &mut rng).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        write_batches(&deck, dir_b.path(), 4, &mut rng).unwrap();

        for name in ["batch_1.txt", "batch_2.txt", "batch_3.txt"] {
            let a = std::fs::read_to_string(dir_a.path().join(name)).unwrap();
            let b = std::fs::read_to_string(dir_b.path().join(name)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_empty_deck_writes_no_batches() {
        let dir = tempfile::tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let written = write_batches(&[], dir.path(), 20, &mut rng).unwrap();
        assert!(written.is_empty());
    }
}
