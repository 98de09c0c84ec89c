//! Path and link utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`)
//! - [`route`]: Link utilities (`is_external_link`, `split_path_fragment`, `page_key`)

pub mod fs;
pub mod route;

pub use fs::normalize_path;
pub use route::{is_external_link, page_key, split_path_fragment, strip_base};
