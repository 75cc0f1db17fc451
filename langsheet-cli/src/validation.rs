//! Input validation helpers shared by the command modules.

use std::path::Path;

/// Validate that a path exists and is a readable file.
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {path}"));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {path}"));
    }

    Ok(())
}

/// Validate that a directory exists and is readable.
pub fn validate_dir_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("Directory does not exist: {path}"));
    }

    if !path_obj.is_dir() {
        return Err(format!("Path is not a directory: {path}"));
    }

    Ok(())
}

/// Validate that an output file's parent directory exists or can be created.
pub fn validate_output_path(path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(error) = std::fs::create_dir_all(parent) {
                return Err(format!("Cannot create output directory: {error}"));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_validate_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("en.json");
        fs::write(&file, "{}").unwrap();

        assert!(validate_file_path(file.to_str().unwrap()).is_ok());
        assert!(validate_file_path(dir.path().to_str().unwrap()).is_err());
        assert!(validate_file_path("/nonexistent/file.json").is_err());
    }

    #[test]
    fn test_validate_dir_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_dir_path(dir.path().to_str().unwrap()).is_ok());
        assert!(validate_dir_path("/nonexistent/dir").is_err());
    }

    #[test]
    fn test_validate_output_path_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/out.xlsx");
        assert!(validate_output_path(nested.to_str().unwrap()).is_ok());
        assert!(nested.parent().unwrap().exists());
    }
}
