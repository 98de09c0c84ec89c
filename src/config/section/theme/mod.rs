//! `[theme]` section configuration.
//!
//! Holds the three link structures handed to the site builder's theme:
//! the top navbar, the sidebar tree and the social links.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.sidebar]]
//! text = "Project"
//! items = [
//!   { text = "Virtual List", link = "/project/virtual-list" },
//! ]
//!
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/someone"
//! ```
//!
//! Each structure comes in two forms: a `Raw*` form that mirrors the file
//! with every field optional, and a typed form that only exists once all
//! required fields were present. The conversion records every problem in
//! [`ConfigDiagnostics`] instead of stopping at the first one.

mod nav;
mod navigate;
mod sidebar;
mod social;

pub use nav::{ActiveMatch, NavItem, RawNavItem};
pub use navigate::{LinkOrigin, LinkRef, Pager, Walk};
pub use sidebar::{RawSidebarNode, SidebarGroup, SidebarLeaf, SidebarNode};
pub use social::{KNOWN_ICONS, RawSocialLink, SocialIcon, SocialLink};

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// `[theme]` as written in the file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    /// Top navigation bar entries.
    pub nav: Vec<RawNavItem>,

    /// Sidebar entries, top-level first.
    pub sidebar: Vec<RawSidebarNode>,

    /// Icon links shown in the navbar.
    #[serde(alias = "socialLinks")]
    pub social_links: Vec<RawSocialLink>,
}

/// Loaded, read-only theme tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    pub nav: Vec<NavItem>,
    pub sidebar: Vec<SidebarNode>,
    pub social_links: Vec<SocialLink>,
}

impl ThemeSection {
    /// Convert into the typed tree, reporting malformed entries to `diag`.
    ///
    /// Malformed entries are left out of the result; callers must not use it
    /// when `diag` has errors.
    pub fn build(&self, diag: &mut ConfigDiagnostics) -> ThemeConfig {
        let nav = self
            .nav
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.build(&format!("theme.nav[{i}]"), diag))
            .collect();

        let sidebar = self
            .sidebar
            .iter()
            .enumerate()
            .filter_map(|(i, node)| node.build(&format!("theme.sidebar[{i}]"), diag))
            .collect();

        let social_links = self
            .social_links
            .iter()
            .enumerate()
            .filter_map(|(i, social)| social.build(&format!("theme.social_links[{i}]"), diag))
            .collect();

        ThemeConfig {
            nav,
            sidebar,
            social_links,
        }
    }
}

/// Require a display label. Empty or whitespace-only labels count as missing.
fn required_text(text: Option<&str>, path: &str, diag: &mut ConfigDiagnostics) -> Option<String> {
    match text {
        Some(text) if !text.trim().is_empty() => Some(text.to_owned()),
        Some(_) => {
            diag.error(format!("{path}.text"), "`text` is empty");
            None
        }
        None => {
            diag.error_with_hint(
                format!("{path}.text"),
                "missing required field `text`",
                "every entry needs a label, e.g. text = \"Guide\"",
            );
            None
        }
    }
}

/// Check a link that is present in the file.
fn checked_link(link: &str, path: &str, diag: &mut ConfigDiagnostics) -> Option<String> {
    if link.trim().is_empty() {
        diag.error(format!("{path}.link"), "`link` is empty");
        return None;
    }
    Some(link.to_owned())
}
