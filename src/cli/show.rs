//! `navtree show`: print the loaded tree as JSON.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::args::ShowArgs;
use crate::config::SiteConfig;
use crate::log;

pub fn show_config(config: &SiteConfig, args: &ShowArgs) -> Result<()> {
    let formatted = to_json(config, args.pretty)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        writeln!(file, "{formatted}")?;
        log!("show"; "wrote output to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}

/// Serialize in declaration order (`serde_json` keeps insertion order).
fn to_json(config: &SiteConfig, pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(formatted)
}
