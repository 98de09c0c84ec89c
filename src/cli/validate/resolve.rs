//! Mapping internal links to candidate markdown files.

use percent_encoding::percent_decode_str;
use std::path::PathBuf;

use crate::utils::path::{is_external_link, split_path_fragment, strip_base};

/// Markdown files (relative to the source dir) that could back `link`.
///
/// Returns `None` for links that are not checked: external URLs and
/// fragment-only anchors. Candidates are in lookup order.
///
/// | link                  | candidates                        |
/// |-----------------------|-----------------------------------|
/// | `/`                   | `index.md`                        |
/// | `/guide/`             | `guide/index.md`                  |
/// | `/guide/intro`        | `guide/intro.md`, `guide/intro/index.md` |
/// | `/guide/intro.html#x` | `guide/intro.md`, `guide/intro/index.md` |
pub fn candidates(link: &str, base: &str) -> Option<Vec<PathBuf>> {
    if is_external_link(link) {
        return None;
    }

    let (path, _) = split_path_fragment(link);
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    if path.is_empty() {
        return None;
    }

    let path = strip_base(path, base);
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    let path = decoded
        .strip_suffix(".html")
        .or_else(|| decoded.strip_suffix(".md"))
        .unwrap_or(&decoded);

    let relative = path.trim_start_matches('/');
    if relative.is_empty() || relative.ends_with('/') {
        return Some(vec![PathBuf::from(format!("{relative}index.md"))]);
    }

    Some(vec![
        PathBuf::from(format!("{relative}.md")),
        PathBuf::from(relative).join("index.md"),
    ])
}
