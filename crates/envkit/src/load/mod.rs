//! Loading `NAME=VALUE` files into the environment.
//!
//! Responsibilities:
//! - Determine the effective order of the default file and caller-named files.
//! - Read each file line by line and set its variables immediately.
//! - Aggregate every failure across files into one `LoadError`.
//!
//! Does NOT handle:
//! - Typed parsing of the loaded values (see `parse`).
//! - Restoring the environment afterwards (see `snapshot`).
//!
//! # File format
//!
//! ```text
//! # this is a comment
//! NAME1=value1
//! NAME2 = value with = signs
//!
//!     # indented comment
//! NAME3=value3
//! ```
//!
//! Blank lines and lines whose first non-whitespace character is `#` are
//! skipped. Other lines are split on the first `=`; name and value are
//! trimmed of surrounding whitespace.

mod error;
mod loader;

#[cfg(test)]
mod tests;

pub use error::{FileError, LoadError};
pub use loader::{Loader, PlannedFile, load};
