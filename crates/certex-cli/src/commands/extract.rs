use certex_core::ingest::{self, PlainTextSource, TextSource};
use certex_core::tables::schema::TablesDef;
use certex_core::tables::{builtin, load_tables};
use certex_core::DocumentInput;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_files: Vec<PathBuf>,
    ocr: bool,
    output_format: &str,
    output_file: Option<PathBuf>,
    tables_file: Option<PathBuf>,
) -> Result<(), certex_core::error::CertexError> {
    let tables: TablesDef = match tables_file {
        Some(path) => load_tables(&path)?,
        None => builtin::load_default()?,
    };

    // Unreadable files join the per-document error list instead of
    // aborting the batch.
    let source = PlainTextSource;
    let mut documents = Vec::new();
    let mut read_errors = Vec::new();
    for path in &input_files {
        let name = path.display().to_string();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                read_errors.push(format!("{name}: {e}"));
                continue;
            }
        };
        let pages = source.extract_pages(&bytes)?;
        let text = ingest::select_page_text(&pages)
            .map(str::to_owned)
            .unwrap_or_default();
        documents.push(DocumentInput {
            name,
            text,
            from_ocr: ocr,
        });
    }

    let mut result = certex_core::extract_batch(&documents, &tables);
    result.files_processed += read_errors.len();
    result.errors.extend(read_errors);

    match output_file {
        Some(path) => {
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} record(s) from {} file(s), written to {}",
                result.records.len(),
                result.files_processed,
                path.display()
            );
            for e in &result.errors {
                eprintln!("  error: {e}");
            }
        }
        None => match output_format {
            "json" => output::json::print(&result)?,
            _ => output::table::print(&result),
        },
    }

    Ok(())
}
