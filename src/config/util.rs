//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from the current directory.
///
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/docs/project/  ← cwd
/// /home/user/site/navtree.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Search upward from `start` for `config_name`.
///
/// An absolute `config_name` is only checked as-is.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_ancestor() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("docs/project");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("navtree.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("navtree.toml")).unwrap();
        assert_eq!(found, temp.path().join("navtree.toml"));
    }

    #[test]
    fn test_nearest_wins() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("navtree.toml"), "").unwrap();
        fs::write(nested.join("navtree.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("navtree.toml")).unwrap();
        assert_eq!(found, nested.join("navtree.toml"));
    }

    #[test]
    fn test_directory_is_not_a_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("navtree.toml")).unwrap();
        assert!(find_config_file_from(temp.path(), Path::new("navtree.toml")).is_none());
    }

    #[test]
    fn test_absolute_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        assert!(find_config_file_from(Path::new("/"), &path).is_none());
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }
}
