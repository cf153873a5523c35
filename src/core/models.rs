use serde::Deserialize;

/// A row of the Concepts sheet: one teachable idea, e.g. "Greeting".
#[derive(Debug, Clone, Deserialize)]
pub struct Concept {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A row of the Examples sheet: one usage sample, with HTML markup in `detail`.
#[derive(Debug, Clone, Deserialize)]
pub struct Example {
    pub id: u32,
    #[serde(alias = "detail_html")]
    pub detail: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub tone_id: Option<u32>,
    #[serde(default)]
    pub mode_id: Option<u32>,
    #[serde(default)]
    pub dialect_id: Option<u32>,
    #[serde(default)]
    pub register_id: Option<u32>,
    #[serde(default)]
    pub nuance_id: Option<u32>,
}

impl Example {
    pub fn metadata_id(&self, kind: MetadataKind) -> Option<u32> {
        match kind {
            MetadataKind::Tone => self.tone_id,
            MetadataKind::Mode => self.mode_id,
            MetadataKind::Dialect => self.dialect_id,
            MetadataKind::Register => self.register_id,
            MetadataKind::Nuance => self.nuance_id,
        }
    }
}

/// A row of the Example Links sheet: a titled reference an example can point at.
#[derive(Debug, Clone, Deserialize)]
pub struct ExampleLink {
    pub id: u32,
    pub title: String,
}

/// A row of the Example concepts sheet, the join table driving card creation.
#[derive(Debug, Clone, Deserialize)]
pub struct ExampleConcept {
    pub concept_id: u32,
    pub example_id: u32,
    #[serde(default)]
    pub example_link_id: Option<u32>,
}

/// A row of one of the metadata sheets (Tones, Modes, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct LookupRow {
    pub id: u32,
    pub title: String,
}

/// One finished card: a prompt side and an answer side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub concept_id: u32,
    pub front: String,
    pub back: String,
}

/// The five optional metadata dimensions an example can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    Tone,
    Mode,
    Dialect,
    Register,
    Nuance,
}

impl MetadataKind {
    /// All dimensions, in the order their lines appear on a card back.
    pub const ALL: [MetadataKind; 5] = [
        MetadataKind::Tone,
        MetadataKind::Mode,
        MetadataKind::Dialect,
        MetadataKind::Register,
        MetadataKind::Nuance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetadataKind::Tone => "Tone",
            MetadataKind::Mode => "Mode",
            MetadataKind::Dialect => "Dialect",
            MetadataKind::Register => "Register",
            MetadataKind::Nuance => "Nuance",
        }
    }

    /// Name of the workbook sheet that defines this dimension.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            MetadataKind::Tone => "Tones",
            MetadataKind::Mode => "Modes",
            MetadataKind::Dialect => "Dialects",
            MetadataKind::Register => "Registers",
            MetadataKind::Nuance => "Nuances",
        }
    }
}
