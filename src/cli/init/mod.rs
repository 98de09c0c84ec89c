//! Config file initialization.
//!
//! Writes a commented `navtree.toml` that loads cleanly as-is.

mod config;

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;
use crate::log;

pub use config::generate_config_template;

/// Write a template config into `dir` (current directory when `None`).
///
/// With `dry_run`, only prints the template to stdout.
pub fn new_config(dir: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let root = dir.map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        log!("error"; "{} already exists", path.display());
        bail!("refusing to overwrite '{}'", path.display());
    }

    config::write_config(&root)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_creates_missing_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("docs");
        new_config(Some(&dir), false).unwrap();
        assert!(dir.join(CONFIG_FILE).is_file());
    }

    #[test]
    fn test_new_config_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "title = \"Mine\"\n").unwrap();

        assert!(new_config(Some(temp.path()), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "title = \"Mine\"\n");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        new_config(Some(temp.path()), true).unwrap();
        assert!(!temp.path().join(CONFIG_FILE).exists());
    }
}
