use crate::model::{CertificateRecord, Status};
use crate::tables::schema::TablesDef;
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::LazyLock;

static PERCENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*%").unwrap());

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

static CRITERIA_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(
            r"ACCEPTANCE\s+CRITERIA\s*:?\s*((?:\+/-|\+-|±)?\s*\d+(?:\.\d+)?\s*%(?:\s+OF\s+(?:FS|FULL\s+SCALE|SPAN|READING))?)",
        )
        .unwrap(),
        Regex::new(r"((?:\+/-|\+-|±)\s*\d+(?:\.\d+)?\s*%\s+OF\s+(?:FS|FULL\s+SCALE|SPAN|READING))")
            .unwrap(),
    ]
});

/// The calibration-results table sits between one of these header phrases
/// and the remarks/signature block.
const REGION_STARTS: &[&str] = &["CALIBRATION RESULTS", "TEST RESULTS", "AS FOUND"];
const REGION_ENDS: &[&str] = &["REMARKS", "CALIBRATED BY", "APPROVED BY", "SIGNATURE"];

/// Extract the acceptance-criteria tolerance text, labeled form first.
pub fn acceptance_criteria(scan: &str) -> String {
    for re in CRITERIA_PATTERNS.iter() {
        if let Some(caps) = re.captures(scan) {
            if let Some(m) = caps.get(1) {
                return m.as_str().trim().to_string();
            }
        }
    }
    String::new()
}

/// Numbers already claimed by other fields (certificate digits, serial and
/// model digit runs, date components). A range candidate colliding with one
/// of these is a false positive.
pub fn excluded_numbers(record: &CertificateRecord) -> HashSet<String> {
    let mut set = HashSet::new();
    for field in [
        &record.certificate_no,
        &record.serial_no,
        &record.model_no,
        &record.calibration_date,
        &record.next_cal_date,
    ] {
        for m in DIGIT_RUN.find_iter(field) {
            set.insert(m.as_str().to_string());
        }
    }
    set
}

/// Extract the measurement range and unit token.
///
/// Equipment-type conditioned: gauges usually report a span ("0-230 psi"),
/// relief/safety valves a single set point ("150 psi"). Falls back to a
/// generic span-then-single search over the unit vocabulary.
pub fn range_and_units(
    scan: &str,
    equipment_type: &str,
    excluded: &HashSet<String>,
    tables: &TablesDef,
) -> (String, String) {
    let alt: Vec<String> = tables
        .units
        .iter()
        .map(|u| regex::escape(&u.to_ascii_uppercase()))
        .collect();
    let alt = alt.join("|");

    let Ok(span_re) = Regex::new(&format!(
        r"\b(\d{{1,4}}(?:\.\d+)?)\s*(?:-|TO\s)\s*(\d{{1,5}}(?:\.\d+)?)\s*({alt})\b"
    )) else {
        return (String::new(), String::new());
    };
    let Ok(single_re) = Regex::new(&format!(r"\b(\d{{1,5}}(?:\.\d+)?)\s*({alt})\b")) else {
        return (String::new(), String::new());
    };
    let Ok(set_re) = Regex::new(&format!(
        r"SET\s+(?:PRESSURE|POINT)\s*:?\s*(\d{{1,5}}(?:\.\d+)?)\s*({alt})\b"
    )) else {
        return (String::new(), String::new());
    };

    let prefer_set_point =
        equipment_type.contains("RELIEF") || equipment_type.contains("SAFETY");

    if prefer_set_point {
        first_single(scan, &set_re, excluded)
            .or_else(|| first_single(scan, &single_re, excluded))
            .or_else(|| first_span(scan, &span_re, excluded))
    } else {
        first_span(scan, &span_re, excluded).or_else(|| first_single(scan, &single_re, excluded))
    }
    .unwrap_or_default()
}

fn first_span(scan: &str, re: &Regex, excluded: &HashSet<String>) -> Option<(String, String)> {
    for caps in re.captures_iter(scan) {
        let (low, high, unit) = (&caps[1], &caps[2], &caps[3]);
        if excluded.contains(low) || excluded.contains(high) {
            continue;
        }
        return Some((format!("{low}-{high}"), unit.to_lowercase()));
    }
    None
}

fn first_single(scan: &str, re: &Regex, excluded: &HashSet<String>) -> Option<(String, String)> {
    for caps in re.captures_iter(scan) {
        let (value, unit) = (&caps[1], &caps[2]);
        if excluded.contains(value) {
            continue;
        }
        return Some((value.to_string(), unit.to_lowercase()));
    }
    None
}

/// Maximum deviation reported in the calibration-results table.
///
/// Collects only the admissible deviation values inside the bounded table
/// region and takes the numeric maximum; when the region is absent, the
/// admissible set is scanned across the whole document instead.
pub fn max_deviation(scan: &str, tables: &TablesDef) -> String {
    if let Some(region) = results_region(scan) {
        if let Some(value) = max_admissible(region, &tables.admissible_deviations) {
            return value;
        }
    }
    max_admissible(scan, &tables.admissible_deviations).unwrap_or_default()
}

fn results_region(scan: &str) -> Option<&str> {
    let start = REGION_STARTS.iter().filter_map(|kw| scan.find(kw)).min()?;
    let end = REGION_ENDS
        .iter()
        .filter_map(|kw| scan[start..].find(kw).map(|i| start + i))
        .min()
        .unwrap_or(scan.len());
    Some(&scan[start..end])
}

fn max_admissible(text: &str, admissible: &[String]) -> Option<String> {
    let mut best: Option<(Decimal, &String)> = None;
    for value in admissible {
        if !token_present(text, value) {
            continue;
        }
        let Ok(decimal) = Decimal::from_str(value) else {
            continue;
        };
        if best.as_ref().map_or(true, |(b, _)| decimal > *b) {
            best = Some((decimal, value));
        }
    }
    best.map(|(_, s)| s.clone())
}

/// Occurrence check with numeric-token boundaries, so "0.00" does not hit
/// inside "10.00".
fn token_present(text: &str, token: &str) -> bool {
    for (start, _) in text.match_indices(token) {
        let before = text[..start].chars().next_back();
        let after = text[start + token.len()..].chars().next();
        let bounded = !before.is_some_and(|c| c.is_ascii_digit() || c == '.')
            && !after.is_some_and(|c| c.is_ascii_digit() || c == '.');
        if bounded {
            return true;
        }
    }
    false
}

/// Derive the pass/fail status from the acceptance criteria and the
/// maximum deviation. Defaults to `Pass` when either input is missing or
/// non-numeric.
pub fn derive_status(acceptance_criteria: &str, max_deviation: &str) -> Status {
    let tolerance = PERCENT
        .captures(acceptance_criteria)
        .and_then(|caps| Decimal::from_str(&caps[1]).ok());
    let deviation = Decimal::from_str(max_deviation.trim()).ok();

    match (tolerance, deviation) {
        // The percent tolerance is not rescaled by the range before the
        // comparison; the deviation is compared against it as-is.
        (Some(tolerance), Some(deviation)) => {
            if deviation <= tolerance {
                Status::Pass
            } else {
                Status::Fail
            }
        }
        _ => Status::Pass,
    }
}
