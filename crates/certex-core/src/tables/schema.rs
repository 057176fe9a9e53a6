use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full set of static extraction tables.
///
/// Everything the heuristics treat as tunable lives here as data rather
/// than code: dictionaries, per-field exclusion sets, known-value lookups
/// and the disambiguation weights. Loaded once at startup and passed into
/// the engine read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Known equipment descriptions, matched as a dictionary pass.
    pub equipment_types: Vec<String>,
    /// Known manufacturer names, matched as a dictionary pass.
    pub manufacturers: Vec<String>,
    /// Unit vocabulary for range extraction (lower-case tokens).
    pub units: Vec<String>,
    /// The admissible deviation values collected from results tables.
    pub admissible_deviations: Vec<String>,
    /// Per-field false-positive strings, keyed by record field name.
    #[serde(default)]
    pub exclusions: BTreeMap<String, Vec<String>>,
    /// Certificate number -> expected values for ambiguous fields.
    #[serde(default)]
    pub known_values: BTreeMap<String, KnownValues>,
    pub weights: Weights,
}

impl TablesDef {
    /// Exclusion set for one record field; empty when none is configured.
    pub fn exclusions_for(&self, field: &str) -> &[String] {
        self.exclusions.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Expected values tied 1:1 to a specific certificate number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownValues {
    #[serde(default)]
    pub serial_no: Option<String>,
    #[serde(default)]
    pub model_no: Option<String>,
}

/// Scoring weights for the candidate disambiguator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weights {
    /// Character radius of the local context window around a match.
    pub window_radius: usize,
    /// Bonus when the field's own label appears in the window.
    pub label_hit: i32,
    /// Bonus per corroborating structural keyword in the window.
    pub structure_hit: i32,
    /// Bonus when the window contains a colon.
    pub colon_hit: i32,
    /// Bonus when the match falls within the first third of the document.
    pub early_position: i32,
    /// Penalty per reference-section marker in the window.
    pub reference_penalty: i32,
    /// Bonus for dictionary-backed ("known-value") candidates.
    pub known_value_bonus: i32,
}
