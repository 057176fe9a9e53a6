use crate::fields::Candidate;
use crate::tables::schema::Weights;

/// Structural keywords whose presence near a match corroborates an
/// identity field (the equipment block of these layouts).
const STRUCTURE_KEYWORDS: &[&str] = &["EQUIPMENT", "MODEL NO", "SERIAL NO"];

/// Markers of the calibration-reference description; a match sitting next
/// to these describes the reference instrument, not the unit under test.
const REFERENCE_MARKERS: &[&str] = &[
    "STANDARD EQUIPMENT USED",
    "REFERENCE STANDARD",
    "HAND PUMP",
    "DIGITAL PRESSURE GAUGE",
    "TRACEABILITY",
];

/// Pick the best candidate for one field.
///
/// The score function is pure and the tie-break is a strict total order
/// (score descending, then offset ascending), so selection is fully
/// deterministic. Candidates with a non-positive score are discarded.
pub fn select(
    candidates: Vec<Candidate>,
    scan: &str,
    labels: &[&str],
    weights: &Weights,
) -> Option<Candidate> {
    let mut scored: Vec<(i32, Candidate)> = candidates
        .into_iter()
        .map(|c| (score(&c, scan, labels, weights), c))
        .filter(|(s, _)| *s > 0)
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.offset.cmp(&b.1.offset)));
    scored.into_iter().next().map(|(_, c)| c)
}

fn score(candidate: &Candidate, scan: &str, labels: &[&str], weights: &Weights) -> i32 {
    let window = window(scan, candidate, weights.window_radius);
    let mut score = 0;

    for label in labels {
        if window.contains(label) {
            score += weights.label_hit;
        }
    }
    for keyword in STRUCTURE_KEYWORDS {
        if window.contains(keyword) {
            score += weights.structure_hit;
        }
    }
    if window.contains(':') {
        score += weights.colon_hit;
    }
    // Identity fields are expected early in the document
    if candidate.offset < scan.len() / 3 {
        score += weights.early_position;
    }
    for marker in REFERENCE_MARKERS {
        if window.contains(marker) {
            score -= weights.reference_penalty;
        }
    }
    if candidate.known_value {
        score += weights.known_value_bonus;
    }

    score
}

/// Fixed-radius context window around the match, adjusted to char
/// boundaries.
fn window<'a>(scan: &'a str, candidate: &Candidate, radius: usize) -> &'a str {
    let mut start = candidate.offset.saturating_sub(radius);
    let mut end = (candidate.offset + candidate.value.len() + radius).min(scan.len());
    while !scan.is_char_boundary(start) {
        start -= 1;
    }
    while !scan.is_char_boundary(end) {
        end += 1;
    }
    &scan[start..end]
}
