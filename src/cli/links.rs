//! `navtree links`: list every link with its origin.

use crate::config::{LinkRef, ThemeConfig};

/// Print one tab-separated line per link: origin, link, label.
pub fn print_links(theme: &ThemeConfig, internal_only: bool) {
    for link in select_links(theme, internal_only) {
        println!("{}\t{}\t{}", link.origin, link.link, link.text);
    }
}

fn select_links(theme: &ThemeConfig, internal_only: bool) -> Vec<LinkRef<'_>> {
    theme
        .links()
        .into_iter()
        .filter(|link| !internal_only || !link.is_external())
        .collect()
}
