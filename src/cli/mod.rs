//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod init;
pub mod links;
pub mod show;
pub mod tree;
pub mod validate;
pub mod watch;

pub use args::{Cli, Commands, ShowArgs, ValidateArgs};
