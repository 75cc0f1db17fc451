//! Placeholder parameter extraction from translation values.
//!
//! Translation strings mark runtime substitution points with `{name}`. The
//! extractor reports each distinct name once, in first-occurrence order, so
//! downstream type generation is deterministic for a given input.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // At least one non-`}` character inside the braces, so `{}` never matches.
    static ref PARAM_REGEX: Regex = Regex::new(r"\{([^}]+)\}").unwrap();
}

/// Extracts the distinct placeholder names appearing in `value`, preserving
/// first-occurrence order. Names are case-sensitive.
pub fn extract_params(value: &str) -> Vec<String> {
    let mut params: Vec<String> = Vec::new();
    for captures in PARAM_REGEX.captures_iter(value) {
        let name = &captures[1];
        if !params.iter().any(|p| p == name) {
            params.push(name.to_string());
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_param() {
        assert_eq!(extract_params("Hello {userName}!"), vec!["userName"]);
    }

    #[test]
    fn test_multiple_params_keep_order() {
        assert_eq!(
            extract_params("{userName} has {action} {count} {item}"),
            vec!["userName", "action", "count", "item"]
        );
    }

    #[test]
    fn test_duplicates_reported_once() {
        assert_eq!(
            extract_params("{a} then {b} then {a} again"),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_empty_braces_ignored() {
        assert!(extract_params("Empty braces {}").is_empty());
    }

    #[test]
    fn test_no_placeholders() {
        assert!(extract_params("Cancel").is_empty());
        assert!(extract_params("").is_empty());
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(extract_params("{name} and {Name}"), vec!["name", "Name"]);
    }
}
