//! The type-contract emitter.
//!
//! Renders a [`TranslationTable`] as a TypeScript module: a closed union of
//! all translation keys, and a record type mapping each parameterized key to
//! the placeholder names it requires. Apart from the generation timestamp in
//! the banner, output is fully determined by the table.

use jiff::Timestamp;

use crate::table::TranslationTable;

/// Renders the contract stamped with the current time.
pub fn render(table: &TranslationTable) -> String {
    render_at(table, &Timestamp::now().to_string())
}

/// Renders the contract with an explicit timestamp string.
pub fn render_at(table: &TranslationTable, generated_at: &str) -> String {
    let keys = if table.keys.is_empty() {
        "never".to_string()
    } else {
        table
            .keys
            .iter()
            .map(|key| format!("'{key}'"))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let params = table
        .param_types
        .iter()
        .map(|(key, params)| {
            let fields = params
                .iter()
                .map(|param| format!("{param}: string | number"))
                .collect::<Vec<_>>()
                .join("; ");
            format!("  '{key}': {{ {fields} }}")
        })
        .collect::<Vec<_>>()
        .join(";\n");

    format!(
        "// This file is auto-generated. Do not edit manually.\n\
         // Generated at: {generated_at}\n\
         \n\
         export type TranslationKeys = {keys};\n\
         \n\
         export type TranslationParams = {{\n\
         {params}\n\
         }};\n"
    )
}
