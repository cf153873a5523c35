use std::collections::HashMap;

use crate::core::{LookupRow, MetadataKind};

/// Value substituted when an example has no id for a dimension, or an
/// id that no row defines.
pub const NEUTRAL: &str = "Neutral";

/// Id -> title map built from one metadata sheet.
#[derive(Debug, Default, Clone)]
pub struct LookupTable {
    entries: HashMap<u32, String>,
}

impl LookupTable {
    pub fn new(rows: Vec<LookupRow>) -> Self {
        let entries = rows.into_iter().map(|row| (row.id, row.title)).collect();
        LookupTable { entries }
    }

    pub fn resolve(&self, id: Option<u32>) -> &str {
        id.and_then(|id| self.entries.get(&id)).map(String::as_str).unwrap_or(NEUTRAL)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The metadata tables that were actually present in the workbook.
///
/// Card backs only carry lines for dimensions registered here, so a
/// workbook without a Tones sheet produces no "Tone:" lines at all.
#[derive(Debug, Default)]
pub struct MetadataCatalog {
    tables: HashMap<MetadataKind, LookupTable>,
}

impl MetadataCatalog {
    pub fn add_table(&mut self, kind: MetadataKind, table: LookupTable) {
        self.tables.insert(kind, table);
    }

    pub fn has(&self, kind: MetadataKind) -> bool {
        self.tables.contains_key(&kind)
    }

    pub fn resolve(&self, kind: MetadataKind, id: Option<u32>) -> &str {
        match self.tables.get(&kind) {
            Some(table) => table.resolve(id),
            None => NEUTRAL,
        }
    }

    /// Registered dimensions in card-back order.
    pub fn present_kinds(&self) -> impl Iterator<Item = MetadataKind> + '_ {
        MetadataKind::ALL.into_iter().filter(|kind| self.has(*kind))
    }
}
