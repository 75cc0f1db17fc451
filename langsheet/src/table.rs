//! The validated translation table model.
//!
//! Built from a single reference locale once cross-locale validation has
//! guaranteed that every locale shares the same key set, so the reference
//! locale's keys are canonical for all of them.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{keypath::FlatResource, placeholder::extract_params};

/// The ordered key list and per-key required-parameter lists derived from a
/// reference locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    /// All key paths, sorted lexicographically. Source iteration order never
    /// leaks into generated output.
    pub keys: Vec<String>,

    /// Required placeholder names per key. Keys without placeholders are
    /// absent, not mapped to an empty list.
    pub param_types: BTreeMap<String, Vec<String>>,
}

impl TranslationTable {
    /// Builds the table from a flattened reference locale.
    pub fn build(reference: &FlatResource) -> Self {
        let mut keys: Vec<String> = reference.keys().cloned().collect();
        keys.sort();

        let mut param_types = BTreeMap::new();
        for (key, value) in reference {
            if let Value::String(text) = value {
                let params = extract_params(text);
                if !params.is_empty() {
                    param_types.insert(key.clone(), params);
                }
            }
        }

        TranslationTable { keys, param_types }
    }
}
