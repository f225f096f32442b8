//! Conversion functions from raw variable values to typed values.
//!
//! Every function here has the shape `fn(&str) -> Result<T, ConversionError>`
//! so it can be handed directly to [`parse`](crate::parse()) or
//! [`override_var`](crate::override_var):
//!
//! ```no_run
//! use envkit::convert;
//!
//! let port = envkit::parse("PORT", convert::port)?;
//! let timeout = envkit::parse("TIMEOUT_SECS", |raw| {
//!     convert::duration_in(raw, convert::Duration::SECOND)
//! })?;
//! # Ok::<(), envkit::ParseError>(())
//! ```

mod absolute_url;
mod duration;
mod int;
mod port;
mod string;

pub use absolute_url::absolute_url;
pub use duration::{duration, duration_in, duration_with};
pub use int::int;
pub use port::port;
pub use string::string;

pub use time::Duration;
pub use url::Url;
