//! `navtree watch`: reload the config file whenever it changes.
//!
//! ```text
//! notify → filter (config file only) → debounce → ConfigHandle::reload → status
//! ```
//!
//! The parent directory is watched rather than the file itself so that
//! editors which save by rename keep being tracked.

use std::ffi::OsStr;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{EventKind, RecursiveMode, Watcher};

use crate::cli::check::summary;
use crate::config::{ConfigDiagnostic, ConfigError, ConfigHandle, LoadOptions, Loaded, Reload};
use crate::logger::WatchStatus;
use crate::utils::plural_count;
use crate::{debug, log};

/// Quiet period after the last event before reloading
const DEBOUNCE_MS: u64 = 300;

/// Watch a loaded config until the watcher shuts down (or the process is interrupted).
pub fn watch_config(loaded: Loaded, options: LoadOptions) -> Result<()> {
    let path = loaded.config.config_path.clone();
    let dir = loaded.config.get_root().to_path_buf();
    let file_name = path
        .file_name()
        .map(OsStr::to_os_string)
        .context("config path has no file name")?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = tx.send(res);
    })?;
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch '{}'", dir.display()))?;

    let handle = ConfigHandle::new(loaded, options);
    let mut status = WatchStatus::new();
    log!("watch"; "watching {} (ctrl-c to stop)", path.display());

    while let Ok(result) = rx.recv() {
        let mut pending = match result {
            Ok(event) => is_config_event(&event, &file_name),
            Err(e) => {
                log!("watch"; "notify error: {}", e);
                false
            }
        };

        // Collapse bursts (write + rename + chmod) into one reload
        loop {
            match rx.recv_timeout(Duration::from_millis(DEBOUNCE_MS)) {
                Ok(Ok(event)) => pending |= is_config_event(&event, &file_name),
                Ok(Err(e)) => log!("watch"; "notify error: {}", e),
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }

        if pending {
            report(&handle, &mut status);
        }
    }

    Ok(())
}

/// Reload and show the outcome on the status line.
fn report(handle: &ConfigHandle, status: &mut WatchStatus) {
    match handle.reload() {
        Ok(Reload::Unchanged) => {
            status.unchanged("config unchanged");
        }
        Ok(Reload::Replaced { warnings }) => {
            let message = format!("reloaded: {}", summary(&handle.get()));
            if warnings.is_empty() {
                status.success(&message);
            } else {
                status.warning(&with_warnings(&message, &warnings));
            }
        }
        Err(err) => {
            status.error("reload failed, keeping previous tree", &detail(err));
        }
    }
}

/// Status text listing every warning, so the block can be cleared as a whole.
fn with_warnings(message: &str, warnings: &[ConfigDiagnostic]) -> String {
    let mut out = format!("{message} ({})", plural_count(warnings.len(), "warning"));
    for warning in warnings {
        out.push('\n');
        out.push_str(&warning.to_string());
    }
    out
}

/// Error text with its full cause chain (TOML errors carry line and column).
fn detail(err: ConfigError) -> String {
    match err {
        ConfigError::Malformed(diag) => diag.to_string(),
        other => format!("{:#}", anyhow::Error::from(other)),
    }
}

/// Whether `event` touches a file named `file_name`.
///
/// Access and metadata-only events are noise (mtime/atime/chmod).
fn is_config_event(event: &notify::Event, file_name: &OsStr) -> bool {
    let relevant = match event.kind {
        EventKind::Create(_) | EventKind::Remove(_) | EventKind::Any => true,
        EventKind::Modify(modify) => !matches!(modify, notify::event::ModifyKind::Metadata(_)),
        EventKind::Access(_) | EventKind::Other => false,
    };
    if !relevant {
        return false;
    }

    debug!("watch"; "raw notify: {:?} {:?}", event.kind, event.paths);
    event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(file_name))
}
