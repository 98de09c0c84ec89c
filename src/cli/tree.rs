//! `navtree tree`: print the theme as an indented outline.

use std::fmt::Write;

use crate::config::{SidebarNode, ThemeConfig};

/// Print the outline to stdout.
pub fn print_tree(theme: &ThemeConfig) {
    print!("{}", render_tree(theme));
}

/// Render nav, sidebar and social links as plain text.
///
/// ```text
/// nav
///   Home → /
/// sidebar
///   ▾ Project
///     Virtual List → /project/virtual-list
/// social
///   github → https://github.com/someone
/// ```
pub fn render_tree(theme: &ThemeConfig) -> String {
    let mut out = String::new();

    if !theme.nav.is_empty() {
        out.push_str("nav\n");
        for item in &theme.nav {
            let _ = writeln!(out, "  {} → {}", item.text, item.link);
        }
    }

    if !theme.sidebar.is_empty() {
        out.push_str("sidebar\n");
        for (depth, node) in theme.walk() {
            let indent = "  ".repeat(depth + 1);
            let _ = writeln!(out, "{indent}{}", node_line(node));
        }
    }

    if !theme.social_links.is_empty() {
        out.push_str("social\n");
        for social in &theme.social_links {
            let _ = writeln!(out, "  {} → {}", social.icon.as_str(), social.link);
        }
    }

    out
}

fn node_line(node: &SidebarNode) -> String {
    match node {
        SidebarNode::Group(group) => {
            let marker = match group.collapsed {
                Some(true) => "▸",
                _ => "▾",
            };
            match &group.link {
                Some(link) => format!("{marker} {} → {link}", group.text),
                None => format!("{marker} {}", group.text),
            }
        }
        SidebarNode::Leaf(leaf) => format!("{} → {}", leaf.text, leaf.link),
    }
}
