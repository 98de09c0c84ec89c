//! Reloadable configuration handle.
//!
//! Uses `arc-swap` for lock-free reads and atomic replacement. A reload
//! swaps in a freshly built tree; readers holding the previous `Arc` keep
//! a consistent view of it.

use crate::config::{ConfigDiagnostic, ConfigError, LoadOptions, Loaded, SiteConfig, read_config_file};
use crate::utils::hash;
use arc_swap::ArcSwap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Outcome of [`ConfigHandle::reload`].
#[derive(Debug, Clone)]
pub enum Reload {
    /// File content is identical to the last successful load.
    Unchanged,
    /// A new tree was swapped in.
    Replaced { warnings: Vec<ConfigDiagnostic> },
}

/// Owner of the current configuration.
///
/// Created explicitly from a loaded value and passed to whoever needs it;
/// there is no process-wide instance.
pub struct ConfigHandle {
    current: ArcSwap<SiteConfig>,
    /// Hash of the file content behind `current`.
    hash: AtomicU64,
    options: LoadOptions,
}

impl ConfigHandle {
    /// Take ownership of a loaded tree. Its `content_hash` is the baseline
    /// for change detection, so an edit made after that load is still seen.
    pub fn new(loaded: Loaded, options: LoadOptions) -> Self {
        Self {
            current: ArcSwap::from_pointee(loaded.config),
            hash: AtomicU64::new(loaded.content_hash),
            options,
        }
    }

    #[inline]
    pub fn get(&self) -> Arc<SiteConfig> {
        self.current.load_full()
    }

    /// Reload from disk if content changed.
    ///
    /// On error the current tree stays in place.
    pub fn reload(&self) -> Result<Reload, ConfigError> {
        let path = self.get().config_path.clone();
        let content = read_config_file(&path)?;

        if hash::compute(&content) == self.hash.load(Ordering::Relaxed) {
            return Ok(Reload::Unchanged);
        }

        let loaded = SiteConfig::parse_file(&content, &path, self.options)?;
        self.current.store(Arc::new(loaded.config));
        self.hash.store(loaded.content_hash, Ordering::Relaxed);

        Ok(Reload::Replaced {
            warnings: loaded.warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE;
    use std::fs;
    use tempfile::TempDir;

    const FIRST: &str = "[[theme.nav]]\ntext = \"Home\"\nlink = \"/\"\n";
    const SECOND: &str = "[[theme.nav]]\ntext = \"Home\"\nlink = \"/\"\n[[theme.nav]]\ntext = \"Blog\"\nlink = \"/blog/\"\n";

    fn setup() -> (TempDir, ConfigHandle) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, FIRST).unwrap();
        let loaded = SiteConfig::load(&path, LoadOptions::default()).unwrap();
        let handle = ConfigHandle::new(loaded, LoadOptions::default());
        (temp, handle)
    }

    #[test]
    fn test_reload_unchanged() {
        let (_temp, handle) = setup();
        assert!(matches!(handle.reload().unwrap(), Reload::Unchanged));
        assert_eq!(handle.get().theme.nav.len(), 1);
    }

    #[test]
    fn test_reload_replaces_wholesale() {
        let (temp, handle) = setup();
        let before = handle.get();

        fs::write(temp.path().join(CONFIG_FILE), SECOND).unwrap();
        assert!(matches!(handle.reload().unwrap(), Reload::Replaced { .. }));

        let after = handle.get();
        assert_eq!(after.theme.nav.len(), 2);
        // Readers of the old tree are unaffected
        assert_eq!(before.theme.nav.len(), 1);
        assert_eq!(after.config_path, before.config_path);
    }

    #[test]
    fn test_failed_reload_keeps_current() {
        let (temp, handle) = setup();

        fs::write(temp.path().join(CONFIG_FILE), "[[theme.nav]]\nlink = \"/\"\n").unwrap();
        let err = handle.reload().unwrap_err();
        assert!(err.diagnostics().is_some());
        assert_eq!(handle.get().theme.nav[0].text, "Home");

        // Fixing the file afterwards is picked up
        fs::write(temp.path().join(CONFIG_FILE), SECOND).unwrap();
        assert!(matches!(handle.reload().unwrap(), Reload::Replaced { .. }));
        assert_eq!(handle.get().theme.nav.len(), 2);
    }

    #[test]
    fn test_edit_before_handle_is_picked_up() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, FIRST).unwrap();
        let loaded = SiteConfig::load(&path, LoadOptions::default()).unwrap();

        // Saved between the initial load and the handle taking over
        fs::write(&path, SECOND).unwrap();
        let handle = ConfigHandle::new(loaded, LoadOptions::default());
        assert_eq!(handle.get().theme.nav.len(), 1);

        assert!(matches!(handle.reload().unwrap(), Reload::Replaced { .. }));
        assert_eq!(handle.get().theme.nav.len(), 2);
    }

    #[test]
    fn test_reload_missing_file() {
        let (temp, handle) = setup();
        fs::remove_file(temp.path().join(CONFIG_FILE)).unwrap();
        assert!(matches!(handle.reload().unwrap_err(), ConfigError::NotFound(_)));
        assert_eq!(handle.get().theme.nav.len(), 1);
    }
}
