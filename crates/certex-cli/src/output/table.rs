use certex_core::model::{CertificateRecord, ExtractionBatchResult};

pub fn print(result: &ExtractionBatchResult) {
    for (i, record) in result.records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_record(record);
    }

    if !result.errors.is_empty() {
        println!("\nErrors:");
        for e in &result.errors {
            println!("  {e}");
        }
    }

    println!(
        "\n{} file(s) processed, {} record(s) extracted",
        result.files_processed,
        result.records.len()
    );
}

fn print_record(record: &CertificateRecord) {
    let heading = if record.certificate_no.is_empty() {
        "(no certificate number)"
    } else {
        &record.certificate_no
    };
    println!("=== {heading} ===\n");

    row("Equipment", &record.equipment_type);
    row("Manufacturer", &record.manufacturer);
    row("Model no", &record.model_no);
    row("Serial no", &record.serial_no);
    row("Accuracy grade", &record.accuracy_grade);
    row("Range", &range_with_units(record));
    row("Calibration date", &record.calibration_date);
    row("Next calibration", &record.next_cal_date);
    row("Location", &record.location);
    row("Max deviation", &record.max_deviation);
    row("Acceptance", &record.acceptance_criteria);
    println!("  {:<18} {}", "Status:", record.status);
}

fn range_with_units(record: &CertificateRecord) -> String {
    if record.range.is_empty() {
        String::new()
    } else if record.units.is_empty() {
        record.range.clone()
    } else {
        format!("{} {}", record.range, record.units)
    }
}

fn row(label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    println!("  {:<18} {}", format!("{label}:"), value);
}
