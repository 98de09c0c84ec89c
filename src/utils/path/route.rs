//! Link processing utilities.
//!
//! Links in the navigation tree follow the site builder's conventions:
//! `/guide/` and `/guide/index.html` name the same page as `/guide/index`,
//! and `/guide/intro`, `/guide/intro.html` and `/guide/intro.md` are one page.

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```
/// use navtree::utils::path::is_external_link;
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/about"));
/// assert!(!is_external_link("./file.txt"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a link into path and fragment parts
///
/// # Examples
/// ```
/// use navtree::utils::path::split_path_fragment;
/// assert_eq!(split_path_fragment("/about#team"), ("/about", "team"));
/// assert_eq!(split_path_fragment("/about"), ("/about", ""));
/// ```
#[inline]
pub fn split_path_fragment(link: &str) -> (&str, &str) {
    link.split_once('#').unwrap_or((link, ""))
}

/// Remove the deployment `base` prefix from an internal link.
///
/// `base` is expected in its validated form (leading and trailing slash).
/// Links outside of `base` are returned unchanged.
///
/// ```
/// use navtree::utils::path::strip_base;
/// assert_eq!(strip_base("/notes/guide/", "/notes/"), "/guide/");
/// assert_eq!(strip_base("/notes", "/notes/"), "/");
/// assert_eq!(strip_base("/guide/", "/"), "/guide/");
/// ```
pub fn strip_base<'a>(link: &'a str, base: &str) -> &'a str {
    if base == "/" || base.is_empty() {
        return link;
    }
    let bare = base.trim_end_matches('/');
    match link.strip_prefix(bare) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => link,
    }
}

/// Canonical page identity of an internal link.
///
/// Drops fragment and query, `.html`/`.md` extensions and a trailing
/// `index` segment, so that every spelling of one page compares equal.
/// Returns `None` when nothing is left once fragment and query are gone
/// (`#top`, `?q=1`, empty string): such links stay on the current page.
///
/// ```
/// use navtree::utils::path::page_key;
/// assert_eq!(page_key("/guide/index.html").as_deref(), Some("/guide/"));
/// assert_eq!(page_key("/guide/intro.md#setup").as_deref(), Some("/guide/intro"));
/// assert_eq!(page_key("guide/intro").as_deref(), Some("/guide/intro"));
/// assert_eq!(page_key("#top"), None);
/// ```
pub fn page_key(link: &str) -> Option<String> {
    let (path, _) = split_path_fragment(link);
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    if path.is_empty() {
        return None;
    }
    let path = path
        .strip_suffix(".html")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(path);
    let path = match path.strip_suffix("index") {
        Some(dir) if dir.is_empty() || dir.ends_with('/') => dir,
        _ => path,
    };

    if path.starts_with('/') {
        Some(path.to_string())
    } else {
        Some(format!("/{path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link("#section"));
        assert!(!is_external_link(":nothing"));
    }

    #[test]
    fn test_split_path_fragment() {
        assert_eq!(split_path_fragment("/about#team"), ("/about", "team"));
        assert_eq!(split_path_fragment("/about"), ("/about", ""));
        assert_eq!(split_path_fragment("#section"), ("", "section"));
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("/notes/project/virtual-list", "/notes/"), "/project/virtual-list");
        assert_eq!(strip_base("/notes/", "/notes/"), "/");
        // A sibling prefix is not the base
        assert_eq!(strip_base("/notesbook/a", "/notes/"), "/notesbook/a");
        assert_eq!(strip_base("/other/a", "/notes/"), "/other/a");
    }

    #[test]
    fn test_page_key_spellings_agree() {
        let expected = page_key("/project/virtual-list");
        assert_eq!(page_key("/project/virtual-list.html"), expected);
        assert_eq!(page_key("/project/virtual-list.md"), expected);
        assert_eq!(page_key("/project/virtual-list#usage"), expected);
        assert_eq!(page_key("/project/virtual-list?ref=nav"), expected);
    }

    #[test]
    fn test_page_key_index() {
        let key = |link| page_key(link).unwrap();
        assert_eq!(key("/"), "/");
        assert_eq!(key("/index"), "/");
        assert_eq!(key("/index.html"), "/");
        assert_eq!(key("/guide/index.md"), "/guide/");
        // `reindex` is a page name, not an index segment
        assert_eq!(key("/reindex"), "/reindex");
    }

    #[test]
    fn test_page_key_without_path() {
        assert_eq!(page_key(""), None);
        assert_eq!(page_key("#top"), None);
        assert_eq!(page_key("?tab=2#top"), None);
    }
}
