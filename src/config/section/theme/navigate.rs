//! Read-only traversal of the theme tree.
//!
//! Everything here follows declaration order and keeps duplicates; nothing
//! is sorted, merged or cached.

use super::{SidebarNode, ThemeConfig};
use crate::utils::path::{is_external_link, page_key};
use serde::Serialize;
use std::fmt;

/// Depth-first, pre-order iterator over the sidebar.
///
/// Yields `(depth, node)` with top-level entries at depth 0.
pub struct Walk<'a> {
    stack: Vec<(usize, std::slice::Iter<'a, SidebarNode>)>,
}

impl<'a> Walk<'a> {
    fn new(nodes: &'a [SidebarNode]) -> Self {
        Self {
            stack: vec![(0, nodes.iter())],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a SidebarNode);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, next) = {
                let (depth, iter) = self.stack.last_mut()?;
                (*depth, iter.next())
            };

            match next {
                Some(node) => {
                    if !node.items().is_empty() {
                        self.stack.push((depth + 1, node.items().iter()));
                    }
                    return Some((depth, node));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Which structure a link was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkOrigin {
    Nav,
    Sidebar,
    Social,
}

impl LinkOrigin {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nav => "nav",
            Self::Sidebar => "sidebar",
            Self::Social => "social",
        }
    }
}

impl fmt::Display for LinkOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A link together with its label and origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkRef<'a> {
    pub origin: LinkOrigin,
    /// Entry label (the icon name for social links).
    pub text: &'a str,
    pub link: &'a str,
}

impl LinkRef<'_> {
    pub fn is_external(&self) -> bool {
        is_external_link(self.link)
    }
}

/// Neighbouring sidebar pages in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager<'a> {
    pub prev: Option<&'a SidebarNode>,
    pub next: Option<&'a SidebarNode>,
}

impl ThemeConfig {
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.sidebar)
    }

    /// Number of sidebar levels (0 when the sidebar is empty).
    pub fn depth(&self) -> usize {
        self.walk().map(|(depth, _)| depth + 1).max().unwrap_or(0)
    }

    /// Every link in the theme: navbar, then sidebar, then social links.
    pub fn links(&self) -> Vec<LinkRef<'_>> {
        let nav = self.nav.iter().map(|item| LinkRef {
            origin: LinkOrigin::Nav,
            text: &item.text,
            link: &item.link,
        });

        let sidebar = self.walk().filter_map(|(_, node)| {
            node.link().map(|link| LinkRef {
                origin: LinkOrigin::Sidebar,
                text: node.text(),
                link,
            })
        });

        let social = self.social_links.iter().map(|social| LinkRef {
            origin: LinkOrigin::Social,
            text: social.icon.as_str(),
            link: &social.link,
        });

        nav.chain(sidebar).chain(social).collect()
    }

    /// Chain of sidebar entries from a top-level entry down to the first
    /// entry linking to `link` (breadcrumb).
    pub fn trail(&self, link: &str) -> Option<Vec<&SidebarNode>> {
        fn search<'a>(nodes: &'a [SidebarNode], key: &str, trail: &mut Vec<&'a SidebarNode>) -> bool {
            for node in nodes {
                trail.push(node);
                if node.link().is_some_and(|l| same_page(l, key)) {
                    return true;
                }
                if search(node.items(), key, trail) {
                    return true;
                }
                trail.pop();
            }
            false
        }

        let key = page_key(link)?;
        let mut trail = Vec::new();
        search(&self.sidebar, &key, &mut trail).then_some(trail)
    }

    /// Previous and next linked sidebar entries around `link`.
    ///
    /// Fragment-only entries are skipped. Returns `None` if no sidebar
    /// entry links to `link`.
    pub fn pager(&self, link: &str) -> Option<Pager<'_>> {
        let key = page_key(link)?;
        let pages: Vec<_> = self
            .walk()
            .map(|(_, node)| node)
            .filter(|node| node.link().and_then(page_key).is_some())
            .collect();

        let index = pages
            .iter()
            .position(|node| node.link().is_some_and(|l| same_page(l, &key)))?;

        Some(Pager {
            prev: index.checked_sub(1).map(|i| pages[i]),
            next: pages.get(index + 1).copied(),
        })
    }
}

/// External and fragment-only links never name a page.
fn same_page(link: &str, key: &str) -> bool {
    !is_external_link(link) && page_key(link).is_some_and(|k| k == key)
}

#[cfg(test)]
mod tests {
    use crate::config::SiteConfig;

    fn config() -> SiteConfig {
        r#"
[[theme.nav]]
text = "Home"
link = "/"

[[theme.nav]]
text = "Project"
link = "/project/"

[[theme.sidebar]]
text = "Project"
link = "/project/"
items = [
  { text = "Virtual List", link = "/project/virtual-list" },
  { text = "Tree", items = [{ text = "Walk", link = "/project/tree/walk" }] },
]

[[theme.sidebar]]
text = "Examples"
items = [
  { text = "Markdown Examples", link = "/markdown-examples" },
  { text = "Markdown Examples", link = "/markdown-examples" },
  { text = "Upstream", link = "https://vitepress.dev" },
]

[[theme.social_links]]
icon = "github"
link = "https://github.com/someone"
"#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_walk_is_preorder_with_depth() {
        let config = config();
        let walked: Vec<_> = config
            .theme
            .walk()
            .map(|(depth, node)| (depth, node.text()))
            .collect();
        assert_eq!(
            walked,
            [
                (0, "Project"),
                (1, "Virtual List"),
                (1, "Tree"),
                (2, "Walk"),
                (0, "Examples"),
                (1, "Markdown Examples"),
                (1, "Markdown Examples"),
                (1, "Upstream"),
            ]
        );
    }

    #[test]
    fn test_depth() {
        assert_eq!(config().theme.depth(), 3);
        assert_eq!(crate::config::ThemeConfig::default().depth(), 0);
    }

    #[test]
    fn test_links_keep_order_and_duplicates() {
        let config = config();
        let links: Vec<_> = config
            .theme
            .links()
            .iter()
            .map(|l| (l.origin.label(), l.link))
            .collect();
        assert_eq!(
            links,
            [
                ("nav", "/"),
                ("nav", "/project/"),
                ("sidebar", "/project/"),
                ("sidebar", "/project/virtual-list"),
                ("sidebar", "/project/tree/walk"),
                ("sidebar", "/markdown-examples"),
                ("sidebar", "/markdown-examples"),
                ("sidebar", "https://vitepress.dev"),
                ("social", "https://github.com/someone"),
            ]
        );
    }

    #[test]
    fn test_trail() {
        let config = config();
        let trail = config.theme.trail("/project/tree/walk.html").unwrap();
        let texts: Vec<_> = trail.iter().map(|n| n.text()).collect();
        assert_eq!(texts, ["Project", "Tree", "Walk"]);

        let trail = config.theme.trail("/project/index").unwrap();
        assert_eq!(trail.len(), 1);

        assert!(config.theme.trail("/missing").is_none());
    }

    #[test]
    fn test_pager() {
        let config = config();
        let pager = config.theme.pager("/project/virtual-list").unwrap();
        assert_eq!(pager.prev.map(|n| n.text()), Some("Project"));
        assert_eq!(pager.next.map(|n| n.text()), Some("Walk"));

        let first = config.theme.pager("/project/").unwrap();
        assert!(first.prev.is_none());

        let last = config.theme.pager("https://vitepress.dev");
        assert!(last.is_none());

        assert!(config.theme.pager("/missing").is_none());
    }

    #[test]
    fn test_fragment_links_are_not_pages() {
        let config: SiteConfig = r##"
[[theme.sidebar]]
text = "Intro"
items = [
  { text = "Top", link = "#top" },
  { text = "Home", link = "/" },
]
"##
        .parse()
        .unwrap();

        let trail = config.theme.trail("/").unwrap();
        let texts: Vec<_> = trail.iter().map(|n| n.text()).collect();
        assert_eq!(texts, ["Intro", "Home"]);

        assert!(config.theme.trail("#top").is_none());
        assert!(config.theme.pager("#top").is_none());
        let pager = config.theme.pager("/").unwrap();
        assert!(pager.prev.is_none());
    }

    #[test]
    fn test_pager_duplicates_resolve_to_first() {
        let config = config();
        let pager = config.theme.pager("/markdown-examples").unwrap();
        assert_eq!(pager.prev.map(|n| n.text()), Some("Walk"));
        assert_eq!(pager.next.map(|n| n.link()), Some(Some("/markdown-examples")));
    }
}
