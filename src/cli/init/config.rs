//! Template generation for `navtree.toml`.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{CONFIG_FILE, SiteSection};

/// Example theme appended after the site fields.
const THEME_EXAMPLE: &str = r#"
# Top navigation bar, in display order.
[[theme.nav]]
text = "Home"
link = "/"

[[theme.nav]]
text = "Guide"
link = "/guide/"
# Regex over the current path; overrides prefix matching when set.
# active_match = "^/guide/"

# Sidebar groups hold `items`; leaves hold only `link`.
[[theme.sidebar]]
text = "Guide"
link = "/guide/"
collapsed = false
items = [
  { text = "Getting Started", link = "/guide/getting-started" },
  { text = "Configuration", link = "/guide/configuration" },
]

[[theme.sidebar]]
text = "Changelog"
link = "/changelog"

# Icon links in the navbar corner.
[[theme.social_links]]
icon = "github"
link = "https://github.com/"
"#;

/// Generate navtree.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# navtree configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&SiteSection::template_with_header());
    out.push('\n');
    out.push_str(THEME_EXAMPLE);

    out
}

/// Write the template to `root/navtree.toml`, creating `root` if needed.
pub fn write_config(root: &Path) -> Result<()> {
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}
