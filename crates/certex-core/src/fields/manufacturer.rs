use super::{
    dictionary_candidates, pattern_candidates, retain_outside_reference, retain_valid, Candidate,
    LABEL_BREAK,
};
use crate::tables::schema::TablesDef;
use regex::Regex;
use std::sync::LazyLock;

/// Corroborating labels for disambiguation scoring.
pub const LABELS: &[&str] = &["MANUFACTURER", "MAKE", "MFG"];

static PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "manufacturer-label",
            Regex::new(&format!(
                r"(?:MANUFACTURER|MFG\.?|MAKE)\s*:?\s*([A-Z][A-Z&., -]{{2,40}}?){LABEL_BREAK}"
            ))
            .unwrap(),
        ),
        // Company-suffix fallback: catches makers missing from the
        // dictionary. One word plus the legal suffix; a wider capture would
        // swallow unrelated preceding words on the single-line scan.
        (
            "company-suffix",
            Regex::new(r"\b([A-Z][A-Z&.]{1,20}\s(?:INC|LTD|LLC|CORP|GMBH)\.?)\b").unwrap(),
        ),
    ]
});

/// Manufacturer candidates: known-maker dictionary pass plus labeled and
/// company-suffix free patterns, with the reference block excluded. The
/// result is expected to go through scored disambiguation.
pub fn candidates(scan: &str, tables: &TablesDef) -> Vec<Candidate> {
    let mut out = dictionary_candidates(scan, &tables.manufacturers, "manufacturer-dictionary");
    out.extend(pattern_candidates(scan, &PATTERNS));
    retain_valid(&mut out, tables.exclusions_for("manufacturer"), 3, 40);
    retain_outside_reference(scan, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::builtin::load_default;

    #[test]
    fn test_dictionary_hit_tagged_known() {
        let tables = load_default().unwrap();
        let cands = candidates("MANUFACTURER : AQUATROL INC MODEL NO: X", &tables);
        let dict = cands
            .iter()
            .find(|c| c.pattern == "manufacturer-dictionary")
            .unwrap();
        assert_eq!(dict.value, "AQUATROL INC");
        assert!(dict.known_value);
    }

    #[test]
    fn test_labeled_unknown_maker() {
        let tables = load_default().unwrap();
        let cands = candidates("MANUFACTURER : BOURDON HAENNI SERIAL NO: 1", &tables);
        assert!(cands.iter().any(|c| c.value == "BOURDON HAENNI"));
    }

    #[test]
    fn test_company_suffix_fallback() {
        let tables = load_default().unwrap();
        let cands = candidates("SUPPLIED BY NORGREN LTD FOR TESTING", &tables);
        assert!(cands
            .iter()
            .any(|c| c.value == "NORGREN LTD" && c.pattern == "company-suffix"));
    }

    #[test]
    fn test_reference_block_maker_discarded() {
        let tables = load_default().unwrap();
        let cands = candidates(
            "STANDARD EQUIPMENT USED WIKA INSTRUMENT HAND PUMP ENVIRONMENTAL CONDITIONS",
            &tables,
        );
        assert!(cands.is_empty());
    }
}
