//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A compile-time checked path to a top-level config field.
///
/// Generated by `#[derive(Config)]` as `SiteSection::FIELDS.<name>`, so that
/// diagnostics cannot drift from the struct definition:
///
/// ```ignore
/// diag.error(SiteSection::FIELDS.base, "must start with `/`");
/// ```
///
/// Paths into the theme tree are built at runtime instead (they carry
/// indices such as `theme.sidebar[2].items[0]`) and are plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
