use crate::error::CertexError;
use crate::tables::schema::TablesDef;

const DEFAULT_TABLES_JSON: &str = include_str!("../../../../tables/default.json");

/// Load the builtin extraction tables embedded in the binary.
pub fn load_default() -> Result<TablesDef, CertexError> {
    let tables: TablesDef = serde_json::from_str(DEFAULT_TABLES_JSON)?;
    crate::tables::validate_tables(&tables)?;
    Ok(tables)
}
