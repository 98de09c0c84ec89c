//! `navtree check`: load the config and summarize it.

use anyhow::Result;

use crate::config::{Loaded, SiteConfig};
use crate::log;
use crate::utils::{plural_count, plural_s};

/// Print a one-line summary of a loaded config.
pub fn check_config(loaded: &Loaded) -> Result<()> {
    let config = &loaded.config;
    let name = config
        .config_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    log!("check"; "{}: {}", name, summary(config));

    if !loaded.warnings.is_empty() {
        let count = loaded.warnings.len();
        log!("check"; "{} warning{}", count, plural_s(count));
    }
    Ok(())
}

/// Counts of every structure in the tree.
pub fn summary(config: &SiteConfig) -> String {
    let theme = &config.theme;
    let groups = theme.walk().filter(|(_, node)| node.is_group()).count();
    let pages = theme.walk().count() - groups;

    format!(
        "{}, {} and {} in the sidebar (depth {}), {}",
        plural_count(theme.nav.len(), "nav item"),
        plural_count(groups, "group"),
        plural_count(pages, "page"),
        theme.depth(),
        plural_count(theme.social_links.len(), "social link"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let config: SiteConfig = r#"
[[theme.nav]]
text = "Home"
link = "/"

[[theme.sidebar]]
text = "Project"
items = [
  { text = "Virtual List", link = "/project/virtual-list" },
  { text = "Drafts", items = [] },
]
"#
        .parse()
        .unwrap();

        assert_eq!(
            summary(&config),
            "1 nav item, 2 groups and 1 page in the sidebar (depth 2), 0 social links"
        );
    }

    #[test]
    fn test_summary_empty() {
        let config: SiteConfig = "".parse().unwrap();
        assert_eq!(
            summary(&config),
            "0 nav items, 0 groups and 0 pages in the sidebar (depth 0), 0 social links"
        );
    }
}
