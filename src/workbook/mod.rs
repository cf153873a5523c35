pub mod lookup;

pub use lookup::{LookupTable, MetadataCatalog, NEUTRAL};

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::core::{
    Concept, Example, ExampleConcept, ExampleLink, LookupRow, MazoError, MetadataKind,
};

pub const CONCEPTS_SHEET: &str = "Concepts";
pub const EXAMPLES_SHEET: &str = "Examples";
pub const EXAMPLE_CONCEPTS_SHEET: &str = "Example concepts";
pub const EXAMPLE_LINKS_SHEET: &str = "Example Links";

/// The course workbook: a directory of CSV files, one per sheet.
///
/// `Concepts`, `Examples` and `Example concepts` must exist. The link
/// sheet and the five metadata sheets are picked up only if their file
/// is present, and absence is not an error.
#[derive(Debug)]
pub struct Workbook {
    pub concepts: Vec<Concept>,
    pub examples: Vec<Example>,
    pub example_concepts: Vec<ExampleConcept>,
    pub example_links: Vec<ExampleLink>,
    pub metadata: MetadataCatalog,
}

impl Workbook {
    pub fn load(dir: &Path) -> Result<Self, MazoError> {
        if !dir.is_dir() {
            return Err(MazoError::Custom(format!(
                "Workbook directory not found: {}",
                dir.display()
            )));
        }

        let concepts = read_required(dir, CONCEPTS_SHEET)?;
        let examples = read_required(dir, EXAMPLES_SHEET)?;
        let example_concepts = read_required(dir, EXAMPLE_CONCEPTS_SHEET)?;
        let example_links: Vec<ExampleLink> =
            read_optional(dir, EXAMPLE_LINKS_SHEET)?.unwrap_or_default();

        let mut metadata = MetadataCatalog::default();
        for kind in MetadataKind::ALL {
            if let Some(rows) = read_optional::<LookupRow>(dir, kind.sheet_name())? {
                metadata.add_table(kind, LookupTable::new(rows));
            }
        }

        Ok(Workbook { concepts, examples, example_concepts, example_links, metadata })
    }
}

fn sheet_path(dir: &Path, sheet: &str) -> PathBuf {
    dir.join(format!("{}.csv", sheet))
}

fn read_sheet<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, MazoError> {
    let mut reader =
        csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }

    Ok(rows)
}

fn read_required<T: DeserializeOwned>(dir: &Path, sheet: &str) -> Result<Vec<T>, MazoError> {
    let path = sheet_path(dir, sheet);
    if !path.exists() {
        return Err(MazoError::MissingSheet(sheet.to_string()));
    }
    read_sheet(&path)
}

fn read_optional<T: DeserializeOwned>(dir: &Path, sheet: &str) -> Result<Option<Vec<T>>, MazoError> {
    let path = sheet_path(dir, sheet);
    if !path.exists() {
        return Ok(None);
    }
    read_sheet(&path).map(Some)
}
