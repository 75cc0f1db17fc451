use std::collections::BTreeSet;
use std::path::Path;

use langsheet::key_set_report;
use serde_json::json;

use crate::locales;
use crate::validation::validate_dir_path;

/// Missing keys shown per locale in text output; the full lists are always
/// available through `--json`.
const DISPLAY_LIMIT: usize = 10;

pub fn run(locales_dir: &str, json_output: bool) -> Result<(), String> {
    validate_dir_path(locales_dir)?;
    let flattened = locales::load_flattened(Path::new(locales_dir)).map_err(|e| e.to_string())?;

    let union: BTreeSet<&String> = flattened.values().flat_map(|flat| flat.keys()).collect();
    let total = union.len();
    let report = key_set_report(&flattened);

    if json_output {
        let per_locale: Vec<_> = flattened
            .iter()
            .map(|(locale, flat)| {
                let missing: Vec<&str> = union
                    .iter()
                    .filter(|key| !flat.contains_key(key.as_str()))
                    .map(|key| key.as_str())
                    .collect();
                json!({
                    "locale": locale,
                    "translated": flat.len(),
                    "total": total,
                    "completion_percent": completion_percent(flat.len(), total),
                    "missing": missing,
                })
            })
            .collect();
        let body = json!({
            "summary": {
                "locales": flattened.len(),
                "unique_keys": total,
                "consistent": report.is_consistent(),
            },
            "locales": per_locale,
            "mismatches": serde_json::to_value(&report.mismatches)
                .map_err(|e| e.to_string())?,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).map_err(|e| e.to_string())?
        );
        return Ok(());
    }

    println!("=== Translation status ===");
    println!("Locales: {}", flattened.len());
    println!("Unique keys: {total}");

    for (locale, flat) in &flattened {
        let missing = total - flat.len();
        println!(
            "{:<8} {:>5}/{} ({:>5.1}%) missing: {missing}",
            locale,
            flat.len(),
            total,
            completion_percent(flat.len(), total)
        );
    }

    if report.is_consistent() {
        println!("\nAll locales share the same key set.");
        return Ok(());
    }

    println!("\nMissing keys:");
    for mismatch in &report.mismatches {
        println!(
            "\n{} is missing {} key(s) present in {}:",
            mismatch.locale,
            mismatch.keys.len(),
            mismatch.compared_to
        );
        for key in mismatch.keys.iter().take(DISPLAY_LIMIT) {
            println!("  - {key}");
        }
        if mismatch.keys.len() > DISPLAY_LIMIT {
            println!("  ... and {} more", mismatch.keys.len() - DISPLAY_LIMIT);
        }
    }
    Ok(())
}

fn completion_percent(translated: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        ((translated as f64) * 10000.0 / (total as f64)).round() / 100.0
    }
}
