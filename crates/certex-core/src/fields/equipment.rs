use super::{
    dictionary_candidates, pattern_candidates, retain_outside_reference, retain_valid, Candidate,
    LABEL_BREAK,
};
use crate::tables::schema::TablesDef;
use regex::Regex;
use std::sync::LazyLock;

/// Corroborating labels for disambiguation scoring.
pub const LABELS: &[&str] = &["EQUIPMENT", "INSTRUMENT", "DESCRIPTION"];

static PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![(
        "equipment-label",
        Regex::new(&format!(
            r"(?:EQUIPMENT|INSTRUMENT|DESCRIPTION)\s*:\s*([A-Z][A-Z /()-]{{2,40}}?){LABEL_BREAK}"
        ))
        .unwrap(),
    )]
});

/// Equipment-type candidates: dictionary pass over the known types first,
/// then the labeled free pattern. Reference-block hits are discarded since
/// that block names the calibration-reference instrument.
pub fn candidates(scan: &str, tables: &TablesDef) -> Vec<Candidate> {
    let mut out = dictionary_candidates(scan, &tables.equipment_types, "equipment-dictionary");
    out.extend(pattern_candidates(scan, &PATTERNS));
    retain_valid(&mut out, tables.exclusions_for("equipment_type"), 3, 40);
    retain_outside_reference(scan, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::builtin::load_default;

    #[test]
    fn test_dictionary_hit() {
        let tables = load_default().unwrap();
        let cands = candidates("EQUIPMENT : PRESSURE GAUGE MANUFACTURER : X", &tables);
        assert!(cands.iter().any(|c| c.value == "PRESSURE GAUGE" && c.known_value));
    }

    #[test]
    fn test_labeled_value_stops_at_next_label() {
        let tables = load_default().unwrap();
        let cands = candidates("EQUIPMENT : ROTAMETER MANUFACTURER : ACME", &tables);
        assert!(cands.iter().any(|c| c.value == "ROTAMETER"));
        assert!(!cands.iter().any(|c| c.value.contains("MANUFACTURER")));
    }

    #[test]
    fn test_reference_block_hit_discarded() {
        let tables = load_default().unwrap();
        let cands = candidates(
            "STANDARD EQUIPMENT USED DIGITAL PRESSURE GAUGE ENVIRONMENTAL CONDITIONS 25C",
            &tables,
        );
        assert!(cands.is_empty());
    }
}
