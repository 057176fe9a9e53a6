pub mod accuracy;
pub mod certificate;
pub mod dates;
pub mod equipment;
pub mod location;
pub mod manufacturer;
pub mod model_no;
pub mod serial;

use regex::Regex;
use std::ops::Range;

/// A provisional extracted value: the surface form, its byte offset in the
/// scan text, the id of the pattern that produced it, and whether it came
/// from a known-value dictionary pass (weighted higher by the
/// disambiguator).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub value: String,
    pub offset: usize,
    pub pattern: &'static str,
    pub known_value: bool,
}

/// Terminator for lazily captured label values: the next `LABEL :` token
/// (one- or two-word) or end of text. Keeps a value from swallowing the
/// following field.
pub(crate) const LABEL_BREAK: &str = r"(?:\s+(?:CALIBRATION|NEXT|CERTIFICATE|MODEL|SERIAL|ACCURACY|ACCEPTANCE|DUE)\s+[A-Z]+\s*:|\s+[A-Z/]+\s*:|$)";

/// Run an ordered pattern list over the scan text. Pattern priority is
/// preserved by emission order: all matches of the first pattern come
/// before any match of the second.
pub(crate) fn pattern_candidates(
    scan: &str,
    patterns: &[(&'static str, Regex)],
) -> Vec<Candidate> {
    let mut out = Vec::new();
    for (id, re) in patterns {
        for caps in re.captures_iter(scan) {
            if let Some(m) = caps.get(1) {
                let value = m.as_str().trim();
                if value.is_empty() {
                    continue;
                }
                out.push(Candidate {
                    value: value.to_string(),
                    offset: m.start(),
                    pattern: id,
                    known_value: false,
                });
            }
        }
    }
    out
}

/// Dictionary lookup pass: every occurrence of a known real-world value.
///
/// Entries are tried longest-first and overlapping shorter matches are
/// dropped, so "PRESSURE RELIEF VALVE" wins over a "PRESSURE GAUGE" style
/// substring collision. Matches require non-alphanumeric neighbours.
pub(crate) fn dictionary_candidates(
    scan: &str,
    entries: &[String],
    pattern: &'static str,
) -> Vec<Candidate> {
    let mut by_len: Vec<&String> = entries.iter().collect();
    by_len.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let mut taken: Vec<Range<usize>> = Vec::new();
    let mut out = Vec::new();
    for entry in by_len {
        if entry.is_empty() {
            continue;
        }
        for (start, _) in scan.match_indices(entry.as_str()) {
            let end = start + entry.len();
            if !word_boundary(scan, start, end) {
                continue;
            }
            if taken.iter().any(|r| start < r.end && end > r.start) {
                continue;
            }
            taken.push(start..end);
            out.push(Candidate {
                value: entry.clone(),
                offset: start,
                pattern,
                known_value: true,
            });
        }
    }
    out.sort_by_key(|c| c.offset);
    out
}

fn word_boundary(scan: &str, start: usize, end: usize) -> bool {
    let before = scan[..start].chars().next_back();
    let after = scan[end..].chars().next();
    !before.is_some_and(|c| c.is_ascii_alphanumeric())
        && !after.is_some_and(|c| c.is_ascii_alphanumeric())
}

/// Detect the span of the "standard equipment used" reference block, which
/// describes the calibration-reference instruments rather than the
/// equipment under test. Candidates inside this span must be discarded for
/// identity-field extraction.
pub fn reference_span(scan: &str) -> Option<Range<usize>> {
    const STARTS: &[&str] = &[
        "STANDARD EQUIPMENT USED",
        "REFERENCE STANDARD",
        "MASTER EQUIPMENT",
    ];
    const ENDS: &[&str] = &[
        "ENVIRONMENTAL CONDITIONS",
        "CALIBRATION RESULTS",
        "CALIBRATION PROCEDURE",
        "ACCEPTANCE CRITERIA",
        "REMARKS",
    ];

    let start = STARTS.iter().filter_map(|kw| scan.find(kw)).min()?;
    let end = ENDS
        .iter()
        .filter_map(|kw| scan[start..].find(kw).map(|i| start + i))
        .min()
        .unwrap_or(scan.len());
    Some(start..end)
}

/// Drop candidates whose offset falls inside the reference block.
pub(crate) fn retain_outside_reference(scan: &str, candidates: &mut Vec<Candidate>) {
    if let Some(span) = reference_span(scan) {
        candidates.retain(|c| !span.contains(&c.offset));
    }
}

/// Exclusion filter shared by every extractor: false-positive strings from
/// the field's table plus length bounds.
pub(crate) fn retain_valid(
    candidates: &mut Vec<Candidate>,
    exclusions: &[String],
    min_len: usize,
    max_len: usize,
) {
    candidates.retain(|c| {
        c.value.len() >= min_len
            && c.value.len() <= max_len
            && !exclusions.iter().any(|e| e == &c.value)
    });
}
