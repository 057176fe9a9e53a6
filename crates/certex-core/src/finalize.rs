use crate::model::CertificateRecord;

/// Tokens that indicate a neighbouring label bled into a captured value
/// ("AQUATROL INC MODEL"). Stripped from the tail of free-text fields.
const LABEL_LEAK: &[&str] = &[
    "MODEL",
    "SERIAL",
    "NO",
    "NUMBER",
    "MANUFACTURER",
    "EQUIPMENT",
    "CALIBRATION",
    "DATE",
    "NEXT",
    "MAKE",
    "TYPE",
    "LOCATION",
    "ACCURACY",
    "GRADE",
];

/// Final cleanup pass over an assembled record. Normalizes whitespace and
/// case, strips leaked label fragments, and applies the model-number
/// sentinel. Idempotent: running it twice yields the same record.
pub fn finalize(record: &mut CertificateRecord) {
    record.certificate_no = clean(&record.certificate_no).to_uppercase();
    record.equipment_type = strip_label_leak(&clean(&record.equipment_type)).to_uppercase();
    record.serial_no = clean(&record.serial_no).to_uppercase();
    record.manufacturer = strip_label_leak(&clean(&record.manufacturer)).to_uppercase();
    record.model_no = clean(&record.model_no).to_uppercase();
    record.accuracy_grade = strip_label_leak(&clean(&record.accuracy_grade));
    record.calibration_date = clean(&record.calibration_date);
    record.next_cal_date = clean(&record.next_cal_date);
    record.location = strip_label_leak(&clean(&record.location)).to_uppercase();
    record.range = clean(&record.range);
    record.units = clean(&record.units).to_lowercase();
    record.max_deviation = clean(&record.max_deviation);
    record.acceptance_criteria = clean(&record.acceptance_criteria);

    if record.model_no.is_empty() {
        record.model_no = "N/A".to_string();
    }
}

/// Collapse whitespace and drop stray colons left over from label capture.
fn clean(value: &str) -> String {
    value
        .replace(':', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_label_leak(value: &str) -> String {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    while let Some(last) = tokens.last() {
        let upper = last.to_ascii_uppercase();
        if LABEL_LEAK.contains(&upper.as_str()) {
            tokens.pop();
        } else {
            break;
        }
    }
    tokens.join(" ")
}
