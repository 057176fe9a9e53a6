use super::{pattern_candidates, Candidate};
use regex::Regex;
use std::sync::LazyLock;

static CAL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "cal-date-label",
            Regex::new(
                r"(?:DATE\s+OF\s+CALIBRATION|CALIBRATION\s+DATE|CAL\.?\s*DATE)\s*:?\s*(\d{1,2}[-/.]\d{1,2}[-/.]\d{4})",
            )
            .unwrap(),
        ),
    ]
});

static NEXT_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "next-date-label",
            Regex::new(
                r"(?:NEXT\s+CALIBRATION(?:\s+DATE)?|NEXT\s+CAL\.?\s*(?:DATE)?|DUE\s+DATE|RECALIBRATION\s+DUE)\s*:?\s*(\d{1,2}[-/.]\d{1,2}[-/.]\d{4})",
            )
            .unwrap(),
        ),
    ]
});

/// Calibration-date and next-calibration-date candidates, canonicalized to
/// the `DD-MM-YYYY` surface form.
///
/// "CALIBRATION DATE" is a substring of "NEXT CALIBRATION DATE", so any
/// calibration-date hit whose value offset coincides with a next-date hit
/// is dropped.
pub fn candidates(scan: &str) -> (Vec<Candidate>, Vec<Candidate>) {
    let next = canonicalized(pattern_candidates(scan, &NEXT_PATTERNS));
    let next_offsets: Vec<usize> = next.iter().map(|c| c.offset).collect();

    let mut cal = canonicalized(pattern_candidates(scan, &CAL_PATTERNS));
    cal.retain(|c| !next_offsets.contains(&c.offset));

    (cal, next)
}

fn canonicalized(candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter_map(|mut c| {
            c.value = canonical_date(&c.value)?;
            Some(c)
        })
        .collect()
}

/// Normalize a matched date to `DD-MM-YYYY`, rejecting impossible
/// day/month/year components. Source formatting is too inconsistent for a
/// real date type, so the record keeps the validated string.
fn canonical_date(raw: &str) -> Option<String> {
    let parts: Vec<&str> = raw.split(['-', '/', '.']).collect();
    if parts.len() != 3 {
        return None;
    }
    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: u32 = parts[2].parse().ok()?;
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) || !(1900..=2099).contains(&year) {
        return None;
    }
    Some(format!("{day:02}-{month:02}-{year:04}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_dates_extracted() {
        let (cal, next) =
            candidates("CALIBRATION DATE : 05-03-2024 NEXT CALIBRATION DATE : 04-03-2025");
        assert_eq!(cal[0].value, "05-03-2024");
        assert_eq!(next[0].value, "04-03-2025");
        assert_eq!(cal.len(), 1);
    }

    #[test]
    fn test_slash_format_canonicalized() {
        let (cal, _) = candidates("CALIBRATION DATE : 5/3/2024");
        assert_eq!(cal[0].value, "05-03-2024");
    }

    #[test]
    fn test_due_date_label() {
        let (_, next) = candidates("DUE DATE : 01.12.2025");
        assert_eq!(next[0].value, "01-12-2025");
    }

    #[test]
    fn test_impossible_date_rejected() {
        let (cal, _) = candidates("CALIBRATION DATE : 45-13-2024");
        assert!(cal.is_empty());
    }

    #[test]
    fn test_next_date_only() {
        let (cal, next) = candidates("NEXT CALIBRATION DATE : 04-03-2025");
        assert!(cal.is_empty());
        assert_eq!(next[0].value, "04-03-2025");
    }
}
