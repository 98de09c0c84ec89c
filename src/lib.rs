//! navtree - navigation tree loader for static documentation sites.
//!
//! Reads a `navtree.toml` describing the navbar, sidebar and social links
//! of a site and turns it into an immutable, validated tree that the page
//! renderer can walk.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let config = navtree::load_site_config(Path::new("navtree.toml"))?;
//! for (depth, node) in config.theme.walk() {
//!     println!("{}{}", "  ".repeat(depth), node.text());
//! }
//! # Ok::<(), navtree::ConfigError>(())
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod utils;

pub use config::{
    ConfigError, ConfigHandle, LoadOptions, Loaded, NavItem, SidebarNode, SiteConfig, SocialLink,
    ThemeConfig, load_site_config,
};
