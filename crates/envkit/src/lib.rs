//! Reading, parsing and temporarily overriding environment variables.
//!
//! This crate provides typed parsing of single variables with a layered
//! error model, a loader for `.env`-style files, a sorted variable
//! collection, and snapshot/restore of the whole environment for hermetic
//! tests.
//!
//! ```no_run
//! use envkit::convert;
//!
//! envkit::load(["local.env"])?;
//!
//! let mut port: u16 = 8080;
//! envkit::override_var(&mut port, "PORT", convert::port).ok();
//! let base_url = envkit::parse("BASE_URL", convert::absolute_url)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The process environment is shared mutable state. Nothing in this crate
//! locks it; callers that touch it from several threads serialize access.

pub mod constants;
pub mod convert;
pub mod env;
mod error;
pub mod fs;
mod load;
mod parse;
mod snapshot;
mod vars;

pub use env::{Environment, ProcessEnv, clear, get, lookup, set, unset};
pub use error::{
    ConversionError, CustomError, DurationError, EnvError, InvalidValueError, NotSetError,
    ParseCause, ParseError, RangeError,
};
pub use load::{FileError, LoadError, Loader, PlannedFile, load};
pub use parse::{override_var, override_var_with, parse, parse_with};
pub use snapshot::{Snapshot, SnapshotGuard};
pub use vars::{Vars, VarsError, get_vars, get_vars_from};
