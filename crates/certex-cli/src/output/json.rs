use certex_core::error::CertexError;
use certex_core::model::ExtractionBatchResult;

pub fn print(result: &ExtractionBatchResult) -> Result<(), CertexError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
