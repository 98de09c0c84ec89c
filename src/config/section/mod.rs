//! Configuration section definitions.
//!
//! | Module  | TOML Section | Purpose                              |
//! |---------|--------------|--------------------------------------|
//! | `theme` | `[theme]`    | Navbar, sidebar tree, social links   |
//!
//! Top-level keys (`title`, `base`, ...) live on
//! [`SiteSection`](crate::config::SiteSection) itself.

pub mod theme;

pub use theme::{
    ActiveMatch, KNOWN_ICONS, LinkOrigin, LinkRef, NavItem, Pager, RawNavItem, RawSidebarNode,
    RawSocialLink, SidebarGroup, SidebarLeaf, SidebarNode, SocialIcon, SocialLink, ThemeConfig,
    ThemeSection, Walk,
};
