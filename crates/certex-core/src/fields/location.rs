use super::{pattern_candidates, Candidate, LABEL_BREAK};
use regex::Regex;
use std::sync::LazyLock;

static PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![(
        "location-label",
        Regex::new(&format!(
            r"(?:LOCATION|PLACE\s+OF\s+CALIBRATION|CALIBRATED\s+AT)\s*:?\s*([A-Z][A-Z0-9,.& -]{{2,40}}?){LABEL_BREAK}"
        ))
        .unwrap(),
    )]
});

pub fn candidates(scan: &str) -> Vec<Candidate> {
    pattern_candidates(scan, &PATTERNS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_location() {
        let cands = candidates("LOCATION : DOHA WORKSHOP CALIBRATION DATE : 01-01-2024");
        assert_eq!(cands[0].value, "DOHA WORKSHOP");
    }

    #[test]
    fn test_calibrated_at_variant() {
        let cands = candidates("CALIBRATED AT : CLIENT SITE, RAS LAFFAN REMARKS : OK");
        assert_eq!(cands[0].value, "CLIENT SITE, RAS LAFFAN");
    }

    #[test]
    fn test_missing() {
        assert!(candidates("NOTHING SPATIAL HERE").is_empty());
    }
}
