use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall calibration outcome. Defaults to `Pass` when derivation is
/// inconclusive (either input missing or non-numeric).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "PASS"),
            Status::Fail => write!(f, "FAIL"),
        }
    }
}

/// The structured record extracted from one certificate document.
///
/// All textual fields are semantically optional: a field the extractors
/// could not recover is the empty string, never null. The one exception is
/// `model_no`, which uses the `"N/A"` sentinel to mean "searched but not
/// found" (enforced by the finalizer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    /// Canonical identifier, `PREFIX-XX-DDDDD` shape when recognized.
    pub certificate_no: String,
    pub equipment_type: String,
    pub serial_no: String,
    pub manufacturer: String,
    pub model_no: String,
    pub accuracy_grade: String,
    /// `DD-MM-YYYY` surface form; kept as a validated string because the
    /// source formatting is too inconsistent for a real date type.
    pub calibration_date: String,
    pub next_cal_date: String,
    pub location: String,
    /// Numeric-range surface text, e.g. `"0-230"` or `"150"`.
    pub range: String,
    /// Lower-case unit token, e.g. `"psi"`.
    pub units: String,
    /// Decimal surface text with two fraction digits, e.g. `"1.00"`.
    pub max_deviation: String,
    pub acceptance_criteria: String,
    pub status: Status,
}

/// Aggregate result of one batch extraction run.
///
/// Created fresh per request, mutated only by the orchestrator while the
/// batch runs, and treated as immutable once returned to the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionBatchResult {
    pub records: Vec<CertificateRecord>,
    pub files_processed: usize,
    /// Per-file error messages; a failed document never aborts the batch.
    pub errors: Vec<String>,
    pub has_records: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default_is_pass() {
        assert_eq!(Status::default(), Status::Pass);
    }

    #[test]
    fn test_status_serializes_as_upper() {
        assert_eq!(serde_json::to_string(&Status::Pass).unwrap(), "\"PASS\"");
        assert_eq!(serde_json::to_string(&Status::Fail).unwrap(), "\"FAIL\"");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = CertificateRecord {
            certificate_no: "PHO-CC-56386".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"certificateNo\":\"PHO-CC-56386\""));
        assert!(json.contains("\"modelNo\""));
        assert!(json.contains("\"status\":\"PASS\""));
    }
}
