//! Integration tests for the extract_certificate() end-to-end pipeline.
//!
//! Documents are plain-text fixtures shaped like the scanned certificates,
//! so these tests run without any OCR backend.

use certex_core::error::CertexError;
use certex_core::model::Status;
use certex_core::tables::builtin::load_default;
use certex_core::{extract_batch, extract_certificate, DocumentInput, ExtractOptions};

fn options() -> ExtractOptions {
    ExtractOptions::default()
}

fn ocr_options() -> ExtractOptions {
    ExtractOptions { from_ocr: true }
}

const GAUGE_CERT: &str = "CALIBRATION CERTIFICATE \
    CERTIFICATE NO : PHO-CC-56386 \
    EQUIPMENT : PRESSURE GAUGE \
    MANUFACTURER : AQUATROL INC \
    MODEL NO : EN837-1 \
    SERIAL NO : AQ-7782 \
    ACCURACY GRADE : 1.6 (CLASS B) \
    RANGE : 0-230 PSI \
    LOCATION : DOHA WORKSHOP \
    CALIBRATION DATE : 05-03-2024 \
    NEXT CALIBRATION DATE : 04-03-2025 \
    STANDARD EQUIPMENT USED DIGITAL PRESSURE GAUGE WIKA INSTRUMENT \
    CALIBRATION RESULTS 0.00 0.50 1.00 \
    ACCEPTANCE CRITERIA : +/- 1.00 % OF FS \
    REMARKS : UNIT CALIBRATED SATISFACTORILY";

// ---------------------------------------------------------------------------
// Full pressure-gauge certificate, every field populated
// ---------------------------------------------------------------------------
#[test]
fn gauge_certificate_end_to_end() {
    let tables = load_default().unwrap();
    let record = extract_certificate(GAUGE_CERT, &tables, &options()).unwrap();

    assert_eq!(record.certificate_no, "PHO-CC-56386");
    assert_eq!(record.equipment_type, "PRESSURE GAUGE");
    assert_eq!(record.manufacturer, "AQUATROL INC");
    assert_eq!(record.model_no, "EN837-1");
    assert_eq!(record.serial_no, "AQ-7782");
    assert_eq!(record.accuracy_grade, "1.6 (CLASS B)");
    assert_eq!(record.range, "0-230");
    assert_eq!(record.units, "psi");
    assert_eq!(record.location, "DOHA WORKSHOP");
    assert_eq!(record.calibration_date, "05-03-2024");
    assert_eq!(record.next_cal_date, "04-03-2025");
    assert_eq!(record.max_deviation, "1.00");
    assert_eq!(record.acceptance_criteria, "+/- 1.00 % OF FS");
    assert_eq!(record.status, Status::Pass);
}

#[test]
fn extraction_is_deterministic() {
    let tables = load_default().unwrap();
    let first = extract_certificate(GAUGE_CERT, &tables, &options()).unwrap();
    let second = extract_certificate(GAUGE_CERT, &tables, &options()).unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Normalization: glued labels and OCR digit confusion
// ---------------------------------------------------------------------------
#[test]
fn glued_label_is_repaired() {
    let tables = load_default().unwrap();
    let text = "CERTIFICATE NO : PHO-CC-99990 \
        EQUIPMENT : PRESSURE GAUGEMANUFACTURER : AQUATROL INC \
        SERIAL NO : XX-1234";
    let record = extract_certificate(text, &tables, &options()).unwrap();
    assert_eq!(record.equipment_type, "PRESSURE GAUGE");
    assert_eq!(record.manufacturer, "AQUATROL INC");
}

#[test]
fn ocr_confusion_in_certificate_number_is_repaired() {
    let tables = load_default().unwrap();
    let text = "CALIBRATION CERTIFICATE CERTIFICATE NO : PHO-CC-S63B6 \
        EQUIPMENT : PRESSURE GAUGE SERIAL NO : AQ-7782";
    let record = extract_certificate(text, &tables, &ocr_options()).unwrap();
    assert_eq!(record.certificate_no, "PHO-CC-56386");
}

#[test]
fn ocr_repair_is_scoped_to_certificate_numbers() {
    let tables = load_default().unwrap();
    // The serial's letters must survive even in OCR mode
    let text = "CERTIFICATE NO : PHO-CC-99990 \
        EQUIPMENT : PRESSURE GAUGE SERIAL NO : SIB-OSI";
    let record = extract_certificate(text, &tables, &ocr_options()).unwrap();
    assert_eq!(record.serial_no, "SIB-OSI");
}

// ---------------------------------------------------------------------------
// Known-value override, anchored on the certificate number
// ---------------------------------------------------------------------------
#[test]
fn confirmed_override_beats_pattern_capture() {
    let tables = load_default().unwrap();
    // OCR read the expected serial W-44018 as W-44O18
    let text = "CERTIFICATE NO : PHO-CC-56114 \
        EQUIPMENT : PRESSURE GAUGE SERIAL NO : W-44O18 RANGE : 0-30 PSI";
    let record = extract_certificate(text, &tables, &options()).unwrap();
    assert_eq!(record.serial_no, "W-44018");
}

#[test]
fn unconfirmed_override_is_not_applied() {
    let tables = load_default().unwrap();
    // Known certificate, but the expected serial is nowhere in the text
    let text = "CERTIFICATE NO : PHO-CC-56114 \
        EQUIPMENT : PRESSURE GAUGE SERIAL NO : ZZ-99999 RANGE : 0-30 PSI";
    let record = extract_certificate(text, &tables, &options()).unwrap();
    assert_eq!(record.serial_no, "ZZ-99999");
}

// ---------------------------------------------------------------------------
// Reference-section filtering
// ---------------------------------------------------------------------------
#[test]
fn reference_block_mentions_are_not_identity_fields() {
    let tables = load_default().unwrap();
    let text = "CERTIFICATE NO : PHO-CC-99990 \
        EQUIPMENT : TEMPERATURE GAUGE \
        STANDARD EQUIPMENT USED WIKA INSTRUMENT DIGITAL PRESSURE GAUGE \
        ENVIRONMENTAL CONDITIONS 25C";
    let record = extract_certificate(text, &tables, &options()).unwrap();
    assert_eq!(record.equipment_type, "TEMPERATURE GAUGE");
    assert_eq!(record.manufacturer, "");
}

// ---------------------------------------------------------------------------
// Equipment-conditioned range extraction
// ---------------------------------------------------------------------------
#[test]
fn relief_valve_takes_set_pressure() {
    let tables = load_default().unwrap();
    let text = "CERTIFICATE NO : PHO-CC-99990 \
        EQUIPMENT : PRESSURE RELIEF VALVE SET PRESSURE : 150 PSI";
    let record = extract_certificate(text, &tables, &options()).unwrap();
    assert_eq!(record.equipment_type, "PRESSURE RELIEF VALVE");
    assert_eq!(record.range, "150");
    assert_eq!(record.units, "psi");
}

// ---------------------------------------------------------------------------
// Sentinels and absence
// ---------------------------------------------------------------------------
#[test]
fn missing_model_number_uses_sentinel() {
    let tables = load_default().unwrap();
    let text = "CERTIFICATE NO : PHO-CC-99990 \
        EQUIPMENT : PRESSURE GAUGE SERIAL NO : XX-1234";
    let record = extract_certificate(text, &tables, &options()).unwrap();
    assert_eq!(record.model_no, "N/A");
    assert_eq!(record.location, "");
    assert_eq!(record.range, "");
}

// ---------------------------------------------------------------------------
// Status derivation
// ---------------------------------------------------------------------------
#[test]
fn deviation_above_tolerance_fails() {
    let tables = load_default().unwrap();
    let text = "CERTIFICATE NO : PHO-CC-99990 EQUIPMENT : PRESSURE GAUGE \
        CALIBRATION RESULTS 1.00 \
        ACCEPTANCE CRITERIA : +/- 0.5 % OF FS REMARKS : SEE ABOVE";
    let record = extract_certificate(text, &tables, &options()).unwrap();
    assert_eq!(record.max_deviation, "1.00");
    assert_eq!(record.status, Status::Fail);
}

#[test]
fn missing_criteria_defaults_to_pass() {
    let tables = load_default().unwrap();
    let text = "CERTIFICATE NO : PHO-CC-99990 EQUIPMENT : PRESSURE GAUGE \
        CALIBRATION RESULTS 1.00 REMARKS : NONE";
    let record = extract_certificate(text, &tables, &options()).unwrap();
    assert_eq!(record.status, Status::Pass);
}

// ---------------------------------------------------------------------------
// Degenerate input and batch isolation
// ---------------------------------------------------------------------------
#[test]
fn short_input_is_rejected() {
    let tables = load_default().unwrap();
    assert!(matches!(
        extract_certificate("", &tables, &options()),
        Err(CertexError::NoTextExtracted)
    ));
    assert!(matches!(
        extract_certificate("  GLITCH  ", &tables, &options()),
        Err(CertexError::NoTextExtracted)
    ));
}

#[test]
fn batch_isolates_failed_documents() {
    let tables = load_default().unwrap();
    let documents = vec![
        DocumentInput {
            name: "good.txt".into(),
            text: GAUGE_CERT.into(),
            from_ocr: false,
        },
        DocumentInput {
            name: "blank.txt".into(),
            text: "   ".into(),
            from_ocr: false,
        },
    ];
    let result = extract_batch(&documents, &tables);
    assert_eq!(result.files_processed, 2);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("blank.txt:"));
    assert!(result.has_records);
}

#[test]
fn empty_batch_has_no_records() {
    let tables = load_default().unwrap();
    let result = extract_batch(&[], &tables);
    assert_eq!(result.files_processed, 0);
    assert!(!result.has_records);
}
