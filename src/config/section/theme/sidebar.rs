//! Sidebar tree.
//!
//! An entry with `items` (even an empty list) is a group; an entry with only
//! a `link` is a leaf. Groups may carry a `link` too, which makes their
//! header clickable.

use super::{checked_link, required_text};
use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Sidebar entry as written in the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSidebarNode {
    pub text: Option<String>,
    pub link: Option<String>,
    pub items: Option<Vec<RawSidebarNode>>,
    pub collapsed: Option<bool>,
}

/// A sidebar entry: either a group of further entries or a single page link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarNode {
    Group(SidebarGroup),
    Leaf(SidebarLeaf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub text: String,

    /// Makes the group header itself a link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// `None`: always open. `Some(false)`: collapsible, open. `Some(true)`: collapsible, closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,

    /// Children in display order.
    pub items: Vec<SidebarNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLeaf {
    pub text: String,
    pub link: String,
}

impl SidebarNode {
    pub fn text(&self) -> &str {
        match self {
            Self::Group(group) => &group.text,
            Self::Leaf(leaf) => &leaf.text,
        }
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.link.as_deref(),
            Self::Leaf(leaf) => Some(&leaf.link),
        }
    }

    /// Children of a group; always empty for a leaf.
    pub fn items(&self) -> &[SidebarNode] {
        match self {
            Self::Group(group) => &group.items,
            Self::Leaf(_) => &[],
        }
    }

    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

impl SidebarGroup {
    pub const fn is_collapsible(&self) -> bool {
        self.collapsed.is_some()
    }
}

impl RawSidebarNode {
    /// Build the typed node at `path` (e.g. `theme.sidebar[0].items[1]`).
    ///
    /// Children are always visited, so one call reports every malformed
    /// entry below this one.
    pub fn build(&self, path: &str, diag: &mut ConfigDiagnostics) -> Option<SidebarNode> {
        let text = required_text(self.text.as_deref(), path, diag);

        let Some(items) = &self.items else {
            return self.build_leaf(text, path, diag);
        };

        let link = self.link.as_deref().map(|link| checked_link(link, path, diag));
        let children: Vec<_> = items
            .iter()
            .enumerate()
            .map(|(i, child)| child.build(&format!("{path}.items[{i}]"), diag))
            .collect();

        let link = match link {
            Some(checked) => Some(checked?),
            None => None,
        };
        let items = children.into_iter().collect::<Option<Vec<_>>>()?;

        Some(SidebarNode::Group(SidebarGroup {
            text: text?,
            link,
            collapsed: self.collapsed,
            items,
        }))
    }

    fn build_leaf(
        &self,
        text: Option<String>,
        path: &str,
        diag: &mut ConfigDiagnostics,
    ) -> Option<SidebarNode> {
        let Some(link) = self.link.as_deref() else {
            diag.error_with_hint(
                path,
                "entry has neither `items` nor `link`",
                "add `link = \"/page\"` for a page, or `items = []` for a group",
            );
            return None;
        };

        if self.collapsed.is_some() {
            diag.warn_with_hint(
                format!("{path}.collapsed"),
                "`collapsed` has no effect on an entry without `items`",
                "remove it, or turn the entry into a group",
            );
        }

        let link = checked_link(link, path, diag);
        Some(SidebarNode::Leaf(SidebarLeaf {
            text: text?,
            link: link?,
        }))
    }
}
