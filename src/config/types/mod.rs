//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error and diagnostic types     |
//! | `field`  | Compile-time checked field paths             |
//! | `handle` | Reloadable configuration handle              |

mod error;
mod field;
mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{ConfigHandle, Reload};
