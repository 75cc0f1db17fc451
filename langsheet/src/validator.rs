//! Cross-locale key-set consistency checking.
//!
//! Every unordered pair of locales is compared in both directions; any key
//! present in one locale but missing in the other fails the run. The error
//! payload carries the complete missing-key lists so callers never depend on
//! console output for the full picture.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::{error::Error, keypath::FlatResource};

/// Keys present in `compared_to` but absent from `locale`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingKeys {
    pub locale: String,
    pub compared_to: String,
    pub keys: Vec<String>,
}

/// The full result of a pairwise key-set comparison across all locales.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    pub mismatches: Vec<MissingKeys>,
}

impl ValidationReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, mismatch) in self.mismatches.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(
                f,
                "missing in `{}` but present in `{}`:",
                mismatch.locale, mismatch.compared_to
            )?;
            for key in &mismatch.keys {
                writeln!(f, "  - {key}")?;
            }
        }
        Ok(())
    }
}

/// Compares every unordered pair of locales and records all asymmetries.
pub fn key_set_report(locales: &BTreeMap<String, FlatResource>) -> ValidationReport {
    let ids: Vec<&String> = locales.keys().collect();
    let sets: Vec<BTreeSet<&str>> = ids
        .iter()
        .map(|id| locales[*id].keys().map(String::as_str).collect())
        .collect();

    let mut mismatches = Vec::new();
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            record_difference(ids[j], ids[i], &sets[i], &sets[j], &mut mismatches);
            record_difference(ids[i], ids[j], &sets[j], &sets[i], &mut mismatches);
        }
    }
    ValidationReport { mismatches }
}

fn record_difference(
    missing_in: &str,
    present_in: &str,
    present_set: &BTreeSet<&str>,
    missing_set: &BTreeSet<&str>,
    out: &mut Vec<MissingKeys>,
) {
    let keys: Vec<String> = present_set
        .difference(missing_set)
        .map(|key| key.to_string())
        .collect();
    if !keys.is_empty() {
        out.push(MissingKeys {
            locale: missing_in.to_string(),
            compared_to: present_in.to_string(),
            keys,
        });
    }
}

/// Fails with [`Error::Validation`] unless all locales share the same key set.
///
/// Validation is all-or-nothing: callers must not proceed to table building
/// or emission when this returns an error.
pub fn validate(locales: &BTreeMap<String, FlatResource>) -> Result<(), Error> {
    let report = key_set_report(locales);
    if report.is_consistent() {
        Ok(())
    } else {
        Err(Error::Validation(report))
    }
}
