//! Internal link validation.
//!
//! Checks that every internal nav and sidebar link resolves to a markdown
//! document under `src_dir`. Social links are external by nature and are
//! only checked for URL shape at load time.

mod report;
mod resolve;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::args::ValidateArgs;
use crate::config::{LinkOrigin, LinkRef, SiteConfig};
use crate::utils::plural_count;
use crate::{debug, log};

use report::ValidationReport;
pub use resolve::candidates;

/// Validate internal links of `config` against its source directory.
pub fn validate_links(config: &SiteConfig, args: &ValidateArgs) -> Result<()> {
    let src_dir = config.source_dir();
    if !src_dir.is_dir() {
        log!("error"; "source directory {} does not exist", src_dir.display());
        anyhow::bail!("missing source directory '{}'", src_dir.display());
    }

    let links: Vec<_> = config
        .theme
        .links()
        .into_iter()
        .filter(|link| link.origin != LinkOrigin::Social)
        .collect();

    log!("validate"; "checking {} against {}", plural_count(links.len(), "link"), src_dir.display());

    let report = check_links(&links, &config.base, &src_dir);

    report.print();
    log!("validate"; "{}", report);

    if report.is_empty() || args.warn_only {
        return Ok(());
    }
    anyhow::bail!(
        "validation failed: {}",
        plural_count(report.error_count(), "unresolved link")
    )
}

fn check_links(links: &[LinkRef<'_>], base: &str, src_dir: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    for link in links {
        let Some(candidates) = candidates(link.link, base) else {
            debug!("validate"; "skipping {}", link.link);
            continue;
        };

        if let Some(found) = candidates.iter().find(|c| src_dir.join(c).is_file()) {
            debug!("validate"; "{} → {}", link.link, found.display());
            continue;
        }

        report.add(
            link.origin,
            link.link.to_string(),
            format!("({:?}, tried {})", link.text, describe(&candidates)),
        );
    }

    report
}

fn describe(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|c| c.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIG_FILE, load_site_config};
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
src_dir = "docs"
base = "/notes/"

[[theme.nav]]
text = "Home"
link = "/notes/"

[[theme.sidebar]]
text = "Project"
link = "/notes/project/"
items = [
  { text = "Virtual List", link = "/notes/project/virtual-list.html" },
  { text = "Missing", link = "/notes/project/missing" },
  { text = "Upstream", link = "https://vitepress.dev" },
]

[[theme.social_links]]
icon = "github"
link = "https://github.com/someone"
"#;

    fn setup() -> (TempDir, SiteConfig) {
        let temp = TempDir::new().unwrap();
        let docs = temp.path().join("docs");
        fs::create_dir_all(docs.join("project")).unwrap();
        fs::write(docs.join("index.md"), "# Home").unwrap();
        fs::write(docs.join("project/index.md"), "# Project").unwrap();
        fs::write(docs.join("project/virtual-list.md"), "# Virtual List").unwrap();

        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, CONFIG).unwrap();
        let config = load_site_config(&path).unwrap();
        (temp, config)
    }

    #[test]
    fn test_check_links_reports_only_missing() {
        let (_temp, config) = setup();
        let links = config.theme.links();
        let report = check_links(&links, &config.base, &config.source_dir());

        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_validate_fails_unless_warn_only() {
        let (_temp, config) = setup();
        let strict = ValidateArgs { warn_only: false };
        let lenient = ValidateArgs { warn_only: true };

        assert!(validate_links(&config, &strict).is_err());
        assert!(validate_links(&config, &lenient).is_ok());
    }

    #[test]
    fn test_validate_passes_when_all_resolve() {
        let (temp, config) = setup();
        fs::write(temp.path().join("docs/project/missing.md"), "").unwrap();

        let args = ValidateArgs { warn_only: false };
        assert!(validate_links(&config, &args).is_ok());
    }

    #[test]
    fn test_missing_source_dir() {
        let (temp, config) = setup();
        fs::remove_dir_all(temp.path().join("docs")).unwrap();

        let args = ValidateArgs { warn_only: true };
        assert!(validate_links(&config, &args).is_err());
    }
}
