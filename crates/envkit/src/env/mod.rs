//! Access to the environment variable table.
//!
//! Responsibilities:
//! - Define the `Environment` capability used by every other module.
//! - Provide `ProcessEnv`, which delegates to the process table.
//! - Provide free functions over the process table (`get`, `lookup`, `set`,
//!   `unset`, `clear`).
//!
//! Does NOT handle:
//! - Typed parsing of values (see `parse`).
//! - Bulk reads into a collection (see `vars::get_vars`).
//!
//! Invariants:
//! - Mutations never panic on invalid names or values; they return `EnvError`.
//! - No implementation provides locking; callers serialize process access.
//! - Reads never alter data: the `String` view skips entries that are not
//!   valid Unicode, the `*_os` view returns them byte for byte.
//!
//! # Examples
//!
//! ```
//! use envkit::env::{Environment, ProcessEnv};
//!
//! fn database_url<E: Environment>(env: &E) -> String {
//!     env.lookup("DATABASE_URL")
//!         .unwrap_or_else(|| "postgres://localhost".to_string())
//! }
//!
//! let url = database_url(&ProcessEnv);
//! ```

mod environment;
#[cfg(any(test, feature = "test-support"))]
mod in_memory;
mod process;

pub use environment::Environment;
#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use process::{ProcessEnv, clear, get, lookup, set, unset};
