use std::collections::HashMap;

use super::clean::clean_detail;
use crate::{
    core::{Concept, Example, Flashcard},
    workbook::{MetadataCatalog, Workbook},
};

/// The joined result: finished cards plus the join rows that could not
/// be resolved, as (row index, reason) pairs.
#[derive(Debug)]
pub struct Deck {
    pub cards: Vec<Flashcard>,
    pub skipped_rows: Vec<(usize, String)>,
}

impl Deck {
    /// Walk the join sheet in row order and denormalize each row into a
    /// flashcard. A row naming a concept, example or link id that no
    /// sheet defines is dropped and recorded, never guessed at.
    pub fn build(workbook: &Workbook) -> Deck {
        let concepts: HashMap<u32, &Concept> =
            workbook.concepts.iter().map(|concept| (concept.id, concept)).collect();
        let examples: HashMap<u32, &Example> =
            workbook.examples.iter().map(|example| (example.id, example)).collect();
        let links: HashMap<u32, &str> =
            workbook.example_links.iter().map(|link| (link.id, link.title.as_str())).collect();

        let mut cards = Vec::new();
        let mut skipped_rows = Vec::new();

        for (row, join) in workbook.example_concepts.iter().enumerate() {
            let concept = match concepts.get(&join.concept_id) {
                Some(concept) => *concept,
                None => {
                    skipped_rows.push((row, format!("concept {} not found", join.concept_id)));
                    continue;
                }
            };

            let example = match examples.get(&join.example_id) {
                Some(example) => *example,
                None => {
                    skipped_rows.push((row, format!("example {} not found", join.example_id)));
                    continue;
                }
            };

            let link_title = match join.example_link_id {
                Some(link_id) => match links.get(&link_id) {
                    Some(title) => Some(*title),
                    None => {
                        skipped_rows.push((row, format!("link {} not found", link_id)));
                        continue;
                    }
                },
                None => None,
            };

            cards.push(Flashcard {
                concept_id: concept.id,
                front: compose_front(concept),
                back: compose_back(example, link_title, &workbook.metadata),
            });
        }

        Deck { cards, skipped_rows }
    }
}

fn compose_front(concept: &Concept) -> String {
    match concept.description.as_deref() {
        Some(description) if !description.is_empty() => {
            format!("{}: {}", concept.title, description)
        }
        _ => concept.title.clone(),
    }
}

fn compose_back(example: &Example, link_title: Option<&str>, metadata: &MetadataCatalog) -> String {
    let mut back = clean_detail(&example.detail);
    back.push('\n');

    if let Some(note) = example.note.as_deref() {
        if !note.is_empty() {
            back.push_str(note);
            back.push('\n');
        }
    }

    let mut lines: Vec<String> = Vec::new();
    for kind in metadata.present_kinds() {
        let value = metadata.resolve(kind, example.metadata_id(kind));
        // A dimension row can exist with an empty title; no point printing it.
        if !value.is_empty() {
            lines.push(format!("{}: {}", kind.label(), value));
        }
    }
    if let Some(title) = link_title {
        lines.push(format!("Link: {}", title));
    }
    back.push_str(&lines.join("\n"));

    back
}

/// Partition cards by concept id, keeping concepts in the order they
/// first appear and cards in deck order within each group.
pub fn group_by_concept(cards: &[Flashcard]) -> Vec<(u32, Vec<Flashcard>)> {
    let mut groups: Vec<(u32, Vec<Flashcard>)> = Vec::new();
    let mut positions: HashMap<u32, usize> = HashMap::new();

    for card in cards {
        match positions.get(&card.concept_id) {
            Some(&index) => groups[index].1.push(card.clone()),
            None => {
                positions.insert(card.concept_id, groups.len());
                groups.push((card.concept_id, vec![card.clone()]));
            }
        }
    }

    groups
}

/// Split cards into runs of at most `size`, preserving order. Only the
/// last run may come up short.
pub fn chunk(cards: &[Flashcard], size: usize) -> Vec<Vec<Flashcard>> {
    assert!(size > 0, "chunk size must be at least 1");
    cards.chunks(size).map(|run| run.to_vec()).collect()
}
