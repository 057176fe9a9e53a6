use certex_core::tables::{builtin, load_tables};
use std::path::Path;

pub fn show() -> Result<(), certex_core::error::CertexError> {
    let tables = builtin::load_default()?;

    println!("{} (version {})\n", tables.name, tables.version);
    if let Some(ref desc) = tables.description {
        println!("{desc}\n");
    }

    println!("Equipment types:");
    for entry in &tables.equipment_types {
        println!("  {entry}");
    }
    println!();

    println!("Manufacturers:");
    for entry in &tables.manufacturers {
        println!("  {entry}");
    }
    println!();

    println!("Units: {}", tables.units.join(", "));
    println!(
        "Admissible deviations: {}",
        tables.admissible_deviations.join(", ")
    );
    println!("Known-value entries: {}", tables.known_values.len());

    if !tables.exclusions.is_empty() {
        println!("\nExclusions:");
        for (field, values) in &tables.exclusions {
            println!("  {:<16} {}", field, values.join(", "));
        }
    }

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), certex_core::error::CertexError> {
    let tables = load_tables(file)?;
    println!("OK: {} (version {}) is valid", tables.name, tables.version);
    println!(
        "  {} equipment type(s), {} manufacturer(s), {} known-value entr(ies)",
        tables.equipment_types.len(),
        tables.manufacturers.len(),
        tables.known_values.len()
    );
    Ok(())
}
