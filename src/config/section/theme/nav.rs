//! Top navigation bar.

use super::{checked_link, required_text};
use crate::config::ConfigDiagnostics;
use crate::utils::path::page_key;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

/// Navbar entry as written in the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNavItem {
    pub text: Option<String>,
    pub link: Option<String>,
    #[serde(alias = "activeMatch")]
    pub active_match: Option<String>,
}

/// A navbar link. Navbar entries never nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,

    /// Overrides the default "same page" highlighting rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<ActiveMatch>,
}

/// Compiled `active_match` pattern.
///
/// Compared and serialized by its source pattern.
#[derive(Debug, Clone)]
pub struct ActiveMatch(Regex);

impl ActiveMatch {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }
}

impl PartialEq for ActiveMatch {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ActiveMatch {}

impl Serialize for ActiveMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl NavItem {
    /// Whether this entry is highlighted while `path` is displayed.
    ///
    /// With `active_match`, the pattern decides. Otherwise the page must be
    /// the linked page, or lie under it when the link names a directory
    /// (`/guide/` covers `/guide/intro`). The root link `/` only matches the
    /// home page.
    pub fn is_active(&self, path: &str) -> bool {
        if let Some(pattern) = &self.active_match {
            return pattern.is_match(path);
        }

        let (Some(current), Some(target)) = (page_key(path), page_key(&self.link)) else {
            return false;
        };
        current == target || (target != "/" && target.ends_with('/') && current.starts_with(&target))
    }
}

impl RawNavItem {
    pub fn build(&self, path: &str, diag: &mut ConfigDiagnostics) -> Option<NavItem> {
        let text = required_text(self.text.as_deref(), path, diag);

        let link = match self.link.as_deref() {
            Some(link) => checked_link(link, path, diag),
            None => {
                diag.error_with_hint(
                    format!("{path}.link"),
                    "missing required field `link`",
                    "navbar entries are plain links; nested menus belong in the sidebar",
                );
                None
            }
        };

        let active_match = match self.active_match.as_deref() {
            Some(pattern) => match ActiveMatch::new(pattern) {
                Ok(compiled) => Some(Some(compiled)),
                Err(e) => {
                    diag.error(
                        format!("{path}.active_match"),
                        format!("invalid pattern: {e}"),
                    );
                    None
                }
            },
            None => Some(None),
        };

        Some(NavItem {
            text: text?,
            link: link?,
            active_match: active_match?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(link: &str, active_match: Option<&str>) -> NavItem {
        NavItem {
            text: "Item".into(),
            link: link.into(),
            active_match: active_match.map(|p| ActiveMatch::new(p).unwrap()),
        }
    }

    fn build(toml: &str) -> (Option<NavItem>, ConfigDiagnostics) {
        let raw: RawNavItem = toml::from_str(toml).unwrap();
        let mut diag = ConfigDiagnostics::new();
        let nav = raw.build("theme.nav[0]", &mut diag);
        (nav, diag)
    }

    #[test]
    fn test_build_nav_item() {
        let (nav, diag) = build(r#"text = "Guide"
link = "/guide/"
activeMatch = "^/guide/""#);
        assert!(!diag.has_errors());
        let nav = nav.unwrap();
        assert_eq!(nav.link, "/guide/");
        assert_eq!(nav.active_match.unwrap().as_str(), "^/guide/");
    }

    #[test]
    fn test_missing_link() {
        let (nav, diag) = build(r#"text = "Guide""#);
        assert!(nav.is_none());
        assert_eq!(diag.errors()[0].field, "theme.nav[0].link");
    }

    #[test]
    fn test_invalid_active_match() {
        let (nav, diag) = build(r#"text = "Guide"
link = "/guide/"
active_match = "(unclosed""#);
        assert!(nav.is_none());
        assert_eq!(diag.errors()[0].field, "theme.nav[0].active_match");
    }

    #[test]
    fn test_is_active_exact() {
        let nav = item("/about", None);
        assert!(nav.is_active("/about"));
        assert!(nav.is_active("/about.html"));
        assert!(!nav.is_active("/about/team"));
    }

    #[test]
    fn test_is_active_directory_prefix() {
        let nav = item("/project/", None);
        assert!(nav.is_active("/project/"));
        assert!(nav.is_active("/project/index.html"));
        assert!(nav.is_active("/project/virtual-list"));
        assert!(!nav.is_active("/projects"));
    }

    #[test]
    fn test_is_active_root_only_home() {
        let nav = item("/", None);
        assert!(nav.is_active("/"));
        assert!(nav.is_active("/index.html"));
        assert!(!nav.is_active("/guide/"));
    }

    #[test]
    fn test_fragment_link_is_never_active() {
        let nav = item("#features", None);
        assert!(!nav.is_active("/"));
        assert!(!nav.is_active("/index.html"));
        assert!(!item("/", None).is_active(""));
    }

    #[test]
    fn test_is_active_pattern_wins() {
        let nav = item("/guide/getting-started", Some("^/guide/"));
        assert!(nav.is_active("/guide/advanced"));
        assert!(!nav.is_active("/project/"));
    }
}
