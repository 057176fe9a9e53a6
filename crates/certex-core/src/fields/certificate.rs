use super::{pattern_candidates, Candidate};
use regex::Regex;
use std::sync::LazyLock;

/// The canonical certificate-number shape for this document family:
/// letters, dash, letters, dash, five digits.
static CANONICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,4}-[A-Z]{2}-\d{5}$").unwrap());

static PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "certificate-label",
            Regex::new(r"CERTIFICATE\s*(?:NO|NUMBER|#)?\s*[:.]?\s*([A-Z]{2,4}-[A-Z]{2}-\d{5})\b")
                .unwrap(),
        ),
        (
            "cert-abbrev",
            Regex::new(r"CERT\.?\s*(?:NO|#)\s*[:.]?\s*([A-Z]{2,4}-[A-Z]{2}-\d{5})\b").unwrap(),
        ),
        (
            "bare-token",
            Regex::new(r"\b([A-Z]{2,4}-[A-Z]{2}-\d{5})\b").unwrap(),
        ),
    ]
});

pub fn is_canonical(value: &str) -> bool {
    CANONICAL.is_match(value)
}

/// Certificate-number candidates in pattern-priority order. The value
/// shape is enforced by the patterns themselves, so every candidate is
/// already canonical.
pub fn candidates(scan: &str) -> Vec<Candidate> {
    pattern_candidates(scan, &PATTERNS)
}
