pub mod builtin;
pub mod schema;

use crate::error::CertexError;
use rust_decimal::Decimal;
use schema::TablesDef;
use std::path::Path;
use std::str::FromStr;

/// Load extraction tables from a JSON file.
pub fn load_tables(path: &Path) -> Result<TablesDef, CertexError> {
    let content = std::fs::read_to_string(path).map_err(|e| CertexError::TablesLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let tables: TablesDef =
        serde_json::from_str(&content).map_err(|e| CertexError::TablesLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_tables(&tables)?;
    Ok(tables)
}

/// Parse extraction tables from a JSON string (no file path context).
pub fn parse_tables_str(json: &str) -> Result<TablesDef, CertexError> {
    let tables: TablesDef = serde_json::from_str(json).map_err(CertexError::Json)?;
    validate_tables(&tables)?;
    Ok(tables)
}

/// Validate that a tables definition is well-formed.
pub fn validate_tables(tables: &TablesDef) -> Result<(), CertexError> {
    if tables.equipment_types.is_empty() {
        return Err(CertexError::TablesInvalid(
            "equipment_types must not be empty".into(),
        ));
    }
    if tables.manufacturers.is_empty() {
        return Err(CertexError::TablesInvalid(
            "manufacturers must not be empty".into(),
        ));
    }
    if tables.units.is_empty() {
        return Err(CertexError::TablesInvalid("units must not be empty".into()));
    }

    for unit in &tables.units {
        if unit.is_empty() || !unit.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(CertexError::TablesInvalid(format!(
                "invalid unit token '{}' (expected lower-case letters)",
                unit
            )));
        }
    }

    for dev in &tables.admissible_deviations {
        if Decimal::from_str(dev).is_err() {
            return Err(CertexError::TablesInvalid(format!(
                "admissible deviation '{}' is not a decimal",
                dev
            )));
        }
    }

    for (cert_no, known) in &tables.known_values {
        if !crate::fields::certificate::is_canonical(cert_no) {
            return Err(CertexError::TablesInvalid(format!(
                "known-value key '{}' is not a canonical certificate number",
                cert_no
            )));
        }
        if known.serial_no.is_none() && known.model_no.is_none() {
            return Err(CertexError::TablesInvalid(format!(
                "known-value entry '{}' supplies no values",
                cert_no
            )));
        }
    }

    if tables.weights.window_radius == 0 {
        return Err(CertexError::TablesInvalid(
            "weights.window_radius must be positive".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> String {
        r#"{
            "name": "Test",
            "version": "1.0",
            "equipment_types": ["PRESSURE GAUGE"],
            "manufacturers": ["AQUATROL INC"],
            "units": ["psi"],
            "admissible_deviations": ["0.00", "1.00"],
            "weights": {
                "window_radius": 60,
                "label_hit": 30,
                "structure_hit": 20,
                "colon_hit": 10,
                "early_position": 15,
                "reference_penalty": 100,
                "known_value_bonus": 40
            }
        }"#
        .to_string()
    }

    #[test]
    fn test_parse_valid_tables() {
        let tables = parse_tables_str(&minimal_json()).unwrap();
        assert_eq!(tables.name, "Test");
        assert!(tables.known_values.is_empty());
    }

    #[test]
    fn test_empty_units_rejected() {
        let json = minimal_json().replace(r#""units": ["psi"]"#, r#""units": []"#);
        assert!(parse_tables_str(&json).is_err());
    }

    #[test]
    fn test_uppercase_unit_rejected() {
        let json = minimal_json().replace(r#""units": ["psi"]"#, r#""units": ["PSI"]"#);
        assert!(parse_tables_str(&json).is_err());
    }

    #[test]
    fn test_bad_deviation_rejected() {
        let json = minimal_json().replace("\"1.00\"", "\"one\"");
        assert!(parse_tables_str(&json).is_err());
    }

    #[test]
    fn test_bad_known_value_key_rejected() {
        let json = minimal_json().replace(
            r#""admissible_deviations": ["0.00", "1.00"],"#,
            r#""admissible_deviations": ["0.00", "1.00"],
               "known_values": { "NOT-A-CERT": { "serial_no": "X123" } },"#,
        );
        assert!(parse_tables_str(&json).is_err());
    }
}
