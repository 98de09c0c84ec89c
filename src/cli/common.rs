//! Common utilities shared across CLI commands.

use anyhow::Result;

use crate::cli::Cli;
use crate::config::{ConfigError, Loaded, SiteConfig, find_config_file};
use crate::{debug, log};

/// Locate and load the config file named by `--config`, printing warnings.
///
/// The file is searched upward from the current directory, so commands
/// work from anywhere inside the site.
pub fn load_config(cli: &Cli) -> Result<Loaded> {
    let Some(path) = find_config_file(&cli.config) else {
        log!(
            "error";
            "config file '{}' not found. Run 'navtree init' to create one.",
            cli.config.display()
        );
        return Err(ConfigError::NotFound(cli.config.clone()).into());
    };

    debug!("config"; "loading {}", path.display());
    let loaded = SiteConfig::load(&path, cli.load_options())?;
    print_warnings(&loaded);
    Ok(loaded)
}

/// Print load warnings (unknown keys, suspicious values).
pub fn print_warnings(loaded: &Loaded) {
    for warning in &loaded.warnings {
        warning.print_warning();
    }
}
