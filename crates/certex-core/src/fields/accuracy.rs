use super::{pattern_candidates, Candidate, LABEL_BREAK};
use regex::Regex;
use std::sync::LazyLock;

static PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "accuracy-label",
            Regex::new(&format!(
                r"ACCURACY\s*(?:GRADE|CLASS)?\s*:?\s*([A-Z0-9][A-Z0-9.%+/() -]{{0,30}}?){LABEL_BREAK}"
            ))
            .unwrap(),
        ),
        (
            "class-label",
            Regex::new(&format!(
                r"\b(?:CLASS|GRADE)\s*:\s*([A-Z0-9][A-Z0-9.%+/() ]{{0,20}}?){LABEL_BREAK}"
            ))
            .unwrap(),
        ),
    ]
});

/// Accuracy-grade candidates; short free text that may carry a
/// parenthetical qualifier like "1.6 (CLASS B)".
pub fn candidates(scan: &str) -> Vec<Candidate> {
    let mut out = pattern_candidates(scan, &PATTERNS);
    out.retain(|c| c.value.len() <= 32);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_with_qualifier() {
        let cands = candidates("ACCURACY GRADE : 1.6 (CLASS B) LOCATION : DOHA");
        assert_eq!(cands[0].value, "1.6 (CLASS B)");
    }

    #[test]
    fn test_bare_accuracy_label() {
        let cands = candidates("ACCURACY : 0.5% FS SERIAL NO: 1");
        assert_eq!(cands[0].value, "0.5% FS");
    }

    #[test]
    fn test_missing() {
        assert!(candidates("NO GRADE INFORMATION HERE").is_empty());
    }
}
