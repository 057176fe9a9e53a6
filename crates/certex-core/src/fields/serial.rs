use super::{certificate, pattern_candidates, retain_valid, Candidate};
use crate::tables::schema::TablesDef;
use regex::Regex;
use std::sync::LazyLock;

static PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "serial-label",
            Regex::new(
                r"SERIAL\s*(?:NO|NUMBER)?\s*\.?\s*:?\s*([A-Z0-9][A-Z0-9-]{2,19})\b",
            )
            .unwrap(),
        ),
        (
            "sn-abbrev",
            Regex::new(r"(?:S/N|SR\.?\s*NO)\s*\.?\s*:?\s*([A-Z0-9][A-Z0-9-]{2,19})\b").unwrap(),
        ),
    ]
});

/// Serial-number candidates. A value that itself looks like a certificate
/// number is rejected: certificate tokens frequently sit right next to the
/// serial label on these layouts.
pub fn candidates(scan: &str, tables: &TablesDef) -> Vec<Candidate> {
    let mut out = pattern_candidates(scan, &PATTERNS);
    out.retain(|c| !certificate::is_canonical(&c.value));
    retain_valid(&mut out, tables.exclusions_for("serial_no"), 3, 20);
    out
}
