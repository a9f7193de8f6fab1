//! File pattern resolution using glob
//!
//! Directory arguments expand to the `.txt` files directly inside them,
//! so `zharf analyze corpus/` works the same as `zharf analyze
//! "corpus/*.txt"`.

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use crate::error::CliError;

/// Resolve file patterns and directories to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let expanded = expand_directory(pattern);
        let paths = glob(&expanded).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

fn expand_directory(pattern: &str) -> String {
    let path = std::path::Path::new(pattern);
    if path.is_dir() {
        return path.join("*.txt").to_string_lossy().into_owned();
    }
    pattern.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a.txt");
        fs::write(&file_path, "text").unwrap();

        let files = resolve_patterns(&[file_path.to_string_lossy().into_owned()]).unwrap();
        assert_eq!(files, vec![file_path]);
    }

    #[test]
    fn test_directory_expands_to_txt_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "one").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "two").unwrap();
        fs::write(temp_dir.path().join("skip.md"), "not text").unwrap();

        let files =
            resolve_patterns(&[temp_dir.path().to_string_lossy().into_owned()]).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "txt"));
    }

    #[test]
    fn test_results_are_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        let b = temp_dir.path().join("b.txt");
        fs::write(&a, "one").unwrap();
        fs::write(&b, "two").unwrap();

        let pattern = temp_dir.path().join("*.txt").to_string_lossy().into_owned();
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();

        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_no_matches_is_an_error() {
        let result = resolve_patterns(&["/nonexistent/**/*.txt".to_string()]);
        assert!(result.is_err());
    }
}
