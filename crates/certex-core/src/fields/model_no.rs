use super::{pattern_candidates, retain_valid, Candidate};
use crate::tables::schema::TablesDef;
use regex::Regex;
use std::sync::LazyLock;

static PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "model-label",
            Regex::new(r"MODEL\s*(?:NO|NUMBER)?\s*\.?\s*:?\s*([A-Z0-9][A-Z0-9/.-]{1,19})\b")
                .unwrap(),
        ),
        (
            "type-label",
            Regex::new(r"\bTYPE\s*:\s*([A-Z0-9][A-Z0-9/.-]{1,19})\b").unwrap(),
        ),
    ]
});

/// Technical-standard references that show up near model labels on these
/// layouts ("calibrated per ISO...") and must not be mistaken for a model.
static STANDARD_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:ISO|IEC|ANSI|ASME)[ /-]?\d").unwrap());

pub fn candidates(scan: &str, tables: &TablesDef) -> Vec<Candidate> {
    let mut out = pattern_candidates(scan, &PATTERNS);
    out.retain(|c| !STANDARD_REF.is_match(&c.value));
    retain_valid(&mut out, tables.exclusions_for("model_no"), 2, 20);
    out
}
