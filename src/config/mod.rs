//! Site navigation configuration (`navtree.toml`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   └── theme/     # [theme]: nav, sidebar, social_links
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Reloadable ConfigHandle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Keys
//!
//! | Key                     | Purpose                                      |
//! |-------------------------|----------------------------------------------|
//! | `title`                 | Site title                                   |
//! | `description`           | Site description                             |
//! | `src_dir`               | Markdown source directory                    |
//! | `base`                  | URL prefix the site is deployed under        |
//! | `[[theme.nav]]`         | Navbar links                                 |
//! | `[[theme.sidebar]]`     | Sidebar tree                                 |
//! | `[[theme.social_links]]`| Icon links                                   |
//!
//! Loading is all-or-nothing: [`SiteConfig::load`] either returns the whole
//! tree or a [`ConfigError`] listing every malformed entry.

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

// Re-export from section/
pub use section::{
    ActiveMatch, KNOWN_ICONS, LinkOrigin, LinkRef, NavItem, Pager, SidebarGroup, SidebarLeaf,
    SidebarNode, SocialIcon, SocialLink, ThemeConfig, Walk,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigHandle, FieldPath, Reload};

use crate::utils::hash;
use crate::utils::path::normalize_path;
use macros::Config;
use section::ThemeSection;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Default config filename
pub const CONFIG_FILE: &str = "navtree.toml";

// ============================================================================
// file representation
// ============================================================================

/// Site navigation configuration.
#[derive(Debug, Clone, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct SiteSection {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Directory holding the markdown documents, relative to this file.
    #[serde(alias = "srcDir")]
    #[config(default = ".")]
    pub src_dir: PathBuf,

    /// URL prefix the site is deployed under, with leading and trailing slash.
    #[config(default = "/")]
    pub base: String,

    /// Navbar, sidebar and social links.
    #[config(skip)]
    pub theme: ThemeSection,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            src_dir: PathBuf::from("."),
            base: "/".into(),
            theme: ThemeSection::default(),
        }
    }
}

impl SiteSection {
    /// Convert into the typed configuration, reporting problems to `diag`.
    fn build(self, diag: &mut ConfigDiagnostics) -> SiteConfig {
        self.validate_base(diag);
        let theme = self.theme.build(diag);

        SiteConfig {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            title: self.title,
            description: self.description,
            src_dir: self.src_dir,
            base: self.base,
            theme,
        }
    }

    fn validate_base(&self, diag: &mut ConfigDiagnostics) {
        if self.base.starts_with('/') && self.base.ends_with('/') {
            return;
        }

        let trimmed = self.base.trim_matches('/');
        let suggestion = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };
        diag.error_with_hint(
            Self::FIELDS.base,
            format!("`{}` must start and end with `/`", self.base),
            format!("set {} = \"{suggestion}\"", Self::FIELDS.base),
        );
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// The loaded navigation configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (empty when parsed from a string)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file
    #[serde(skip)]
    pub root: PathBuf,

    pub title: String,
    pub description: String,
    pub src_dir: PathBuf,
    pub base: String,
    pub theme: ThemeConfig,
}

/// Options controlling how strictly a file is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Treat unknown keys as errors instead of warnings.
    pub strict: bool,
}

/// A successfully loaded configuration plus the warnings raised on the way.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: SiteConfig,
    pub warnings: Vec<ConfigDiagnostic>,
    /// Hash of the exact content `config` was built from.
    pub content_hash: u64,
}

/// Load the configuration file at `path` with default options.
///
/// Same file content, same tree: nothing here depends on time, environment
/// or previous loads.
pub fn load_site_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    SiteConfig::load(path, LoadOptions::default()).map(|loaded| loaded.config)
}

impl SiteConfig {
    /// Load configuration from file path.
    pub fn load(path: &Path, options: LoadOptions) -> Result<Loaded, ConfigError> {
        let content = read_config_file(path)?;
        Self::parse_file(&content, path, options)
    }

    /// Parse `content` that was read from `path`.
    pub fn parse_file(content: &str, path: &Path, options: LoadOptions) -> Result<Loaded, ConfigError> {
        let mut loaded = Self::parse(content, options)?;
        let config_path = normalize_path(path);
        loaded.config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        loaded.config.config_path = config_path;
        Ok(loaded)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str, options: LoadOptions) -> Result<Loaded, ConfigError> {
        let (section, ignored) = Self::parse_with_ignored(content)?;

        let mut diag = ConfigDiagnostics::new();
        Self::report_unknown_fields(&ignored, options, &mut diag);
        let config = section.build(&mut diag);

        let warnings = diag.into_result().map_err(ConfigError::Malformed)?;
        Ok(Loaded {
            config,
            warnings,
            content_hash: hash::compute(content),
        })
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(SiteSection, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let section = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(field_path(&path));
        })?;
        Ok((section, ignored))
    }

    fn report_unknown_fields(fields: &[String], options: LoadOptions, diag: &mut ConfigDiagnostics) {
        for field in fields {
            if options.strict {
                diag.error_with_hint(field, "unknown field", "remove it or check its spelling");
            } else {
                diag.warn(field, "unknown field, ignored");
            }
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Directory the site builder resolves internal links against.
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.src_dir)
    }
}

/// Read a config file, telling a missing file apart from other IO errors.
pub(crate) fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io(path.to_path_buf(), err),
    })
}

/// Render an ignored key the way diagnostics name fields: `theme.nav[0].icon`.
fn field_path(path: &serde_ignored::Path<'_>) -> String {
    use serde_ignored::Path;

    match path {
        Path::Root => String::new(),
        Path::Seq { parent, index } => format!("{}[{index}]", field_path(parent)),
        Path::Map { parent, key } => match field_path(parent) {
            parent if parent.is_empty() => key.to_string(),
            parent => format!("{parent}.{key}"),
        },
        Path::Some { parent } | Path::NewtypeStruct { parent } | Path::NewtypeVariant { parent } => {
            field_path(parent)
        }
    }
}

impl FromStr for SiteConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::parse(content, LoadOptions::default()).map(|loaded| loaded.config)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required fields.
/// Panics on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let content = format!("title = \"Test\"\ndescription = \"Test\"\n{extra}");
    SiteConfig::parse(&content, LoadOptions { strict: true })
        .unwrap()
        .config
}

// ============================================================================
// tests
// ============================================================================
