//! Utility modules shared by the loader and the command handlers.

pub mod hash;
pub mod path;
pub mod plural;

pub use plural::{plural_count, plural_s};
