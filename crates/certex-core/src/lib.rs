pub mod derived;
pub mod error;
pub mod fields;
pub mod finalize;
pub mod ingest;
pub mod model;
pub mod normalize;
pub mod overrides;
pub mod score;
pub mod tables;

use error::CertexError;
use fields::Candidate;
use model::{CertificateRecord, ExtractionBatchResult};
use tables::schema::TablesDef;

/// Shorter trimmed inputs are scanner glitches, not certificates.
const MIN_TEXT_LEN: usize = 30;

/// Per-document extraction options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Apply OCR confusion repair during normalization.
    pub from_ocr: bool,
}

/// One document queued for batch extraction.
#[derive(Debug, Clone)]
pub struct DocumentInput {
    pub name: String,
    pub text: String,
    pub from_ocr: bool,
}

/// Main API entry point: extract a structured record from the text of one
/// calibration certificate.
///
/// The pipeline is normalize, then run the field extractors over a single
/// upper-cased scan string, resolve ambiguous fields, derive the
/// range/deviation/status fields, and finalize. Pure aside from the text
/// input; the same text and tables always produce the same record.
pub fn extract_certificate(
    raw_text: &str,
    tables: &TablesDef,
    options: &ExtractOptions,
) -> Result<CertificateRecord, CertexError> {
    if raw_text.trim().len() < MIN_TEXT_LEN {
        return Err(CertexError::NoTextExtracted);
    }

    let normalized = normalize::normalize(raw_text, options.from_ocr);
    // ASCII case fold is length-preserving, so candidate byte offsets into
    // the scan remain valid.
    let scan = normalized.to_ascii_uppercase();

    let mut record = CertificateRecord {
        certificate_no: first_value(fields::certificate::candidates(&scan)),
        ..Default::default()
    };

    // Dictionary-backed fields go through the scored disambiguator; the
    // rest take the best pattern's first hit.
    record.equipment_type = score::select(
        fields::equipment::candidates(&scan, tables),
        &scan,
        fields::equipment::LABELS,
        &tables.weights,
    )
    .map(|c| c.value)
    .unwrap_or_default();

    record.manufacturer = score::select(
        fields::manufacturer::candidates(&scan, tables),
        &scan,
        fields::manufacturer::LABELS,
        &tables.weights,
    )
    .map(|c| c.value)
    .unwrap_or_default();

    let known = overrides::known_for(tables, &record.certificate_no);
    record.serial_no = resolved(
        known.and_then(|k| k.serial_no.as_deref()),
        &scan,
        fields::serial::candidates(&scan, tables),
    );
    record.model_no = resolved(
        known.and_then(|k| k.model_no.as_deref()),
        &scan,
        fields::model_no::candidates(&scan, tables),
    );

    let (cal_dates, next_dates) = fields::dates::candidates(&scan);
    record.calibration_date = first_value(cal_dates);
    record.next_cal_date = first_value(next_dates);

    record.accuracy_grade = first_value(fields::accuracy::candidates(&scan));
    record.location = first_value(fields::location::candidates(&scan));
    record.acceptance_criteria = derived::acceptance_criteria(&scan);

    let excluded = derived::excluded_numbers(&record);
    let (range, units) = derived::range_and_units(&scan, &record.equipment_type, &excluded, tables);
    record.range = range;
    record.units = units;

    record.max_deviation = derived::max_deviation(&scan, tables);
    record.status = derived::derive_status(&record.acceptance_criteria, &record.max_deviation);

    finalize::finalize(&mut record);
    Ok(record)
}

/// Run a batch of documents, isolating per-document failures. A document
/// that fails to yield a record contributes an error line instead of
/// aborting the remaining files.
pub fn extract_batch(documents: &[DocumentInput], tables: &TablesDef) -> ExtractionBatchResult {
    let mut result = ExtractionBatchResult::default();
    for document in documents {
        result.files_processed += 1;
        let options = ExtractOptions {
            from_ocr: document.from_ocr,
        };
        match extract_certificate(&document.text, tables, &options) {
            Ok(record) => result.records.push(record),
            Err(err) => result.errors.push(format!("{}: {err}", document.name)),
        }
    }
    result.has_records = !result.records.is_empty();
    result
}

/// First candidate in emission order, which already encodes pattern
/// priority.
fn first_value(candidates: Vec<Candidate>) -> String {
    candidates.into_iter().next().map(|c| c.value).unwrap_or_default()
}

/// Known-value override: when the certificate number keys an expected value
/// and the document itself confirms it (confusion-tolerant), the table's
/// canonical form wins over whatever the patterns captured.
fn resolved(expected: Option<&str>, scan: &str, candidates: Vec<Candidate>) -> String {
    if let Some(expected) = expected {
        if overrides::confirmed(scan, expected) {
            return expected.to_string();
        }
    }
    first_value(candidates)
}
