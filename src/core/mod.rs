pub mod errors;
pub mod models;

pub use errors::MazoError;
pub use models::{Concept, Example, ExampleConcept, ExampleLink, Flashcard, LookupRow, MetadataKind};
