//! Bidirectional codec between nested locale resource trees and flat
//! dot-delimited key/value maps.
//!
//! A locale resource tree is a JSON object whose nested objects form the key
//! hierarchy. Strings and arrays are leaves; arrays are kept opaque and never
//! recursed into. The flat form maps `a.b.c` paths to the leaf values, in the
//! insertion order of the source tree (serde_json is built with
//! `preserve_order`).

use serde_json::{Map, Value};

use crate::error::Error;

/// A flat mapping from dot-delimited key path to leaf value.
pub type FlatResource = Map<String, Value>;

/// Maximum number of path segments in a single key. Deeper trees are rejected
/// rather than risking stack exhaustion on pathological input.
pub const MAX_DEPTH: usize = 128;

/// Flattens a locale resource tree into a [`FlatResource`].
///
/// Every non-object value (string, array, number, ...) becomes a leaf bound to
/// its dot-joined path. Entry order follows the source tree.
pub fn flatten(tree: &Map<String, Value>) -> Result<FlatResource, Error> {
    let mut flat = Map::new();
    for (key, value) in tree {
        flatten_into(key.clone(), value, &mut flat, 1)?;
    }
    Ok(flat)
}

fn flatten_into(
    path: String,
    value: &Value,
    out: &mut FlatResource,
    depth: usize,
) -> Result<(), Error> {
    if depth > MAX_DEPTH {
        return Err(Error::NestingTooDeep(path));
    }
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(format!("{path}.{key}"), child, out, depth + 1)?;
            }
        }
        leaf => {
            out.insert(path, leaf.clone());
        }
    }
    Ok(())
}

/// Rebuilds a nested locale resource tree from a [`FlatResource`].
///
/// A path that is simultaneously a leaf and a prefix of another path (for
/// example `a` alongside `a.b`) is rejected with
/// [`Error::StructuralConflict`]; such input has no well-defined tree shape.
pub fn unflatten(flat: &FlatResource) -> Result<Map<String, Value>, Error> {
    let mut root = Map::new();
    for (path, value) in flat {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.len() > MAX_DEPTH {
            return Err(Error::NestingTooDeep(path.clone()));
        }
        insert_path(&mut root, path, &segments, value)?;
    }
    Ok(root)
}

fn insert_path(
    root: &mut Map<String, Value>,
    path: &str,
    segments: &[&str],
    value: &Value,
) -> Result<(), Error> {
    let mut current = root;
    for segment in &segments[..segments.len() - 1] {
        let slot = current
            .entry((*segment).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        current = match slot {
            Value::Object(map) => map,
            _ => {
                return Err(Error::StructuralConflict {
                    path: path.to_string(),
                });
            }
        };
    }
    let last = segments[segments.len() - 1];
    if current.contains_key(last) {
        return Err(Error::StructuralConflict {
            path: path.to_string(),
        });
    }
    current.insert(last.to_string(), value.clone());
    Ok(())
}
