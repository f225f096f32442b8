//! Typed parsing of single variables.
//!
//! Responsibilities:
//! - Look up a named variable and convert it with a caller-supplied function.
//! - Wrap lookup and conversion failures in a name-scoped `ParseError`.
//! - Override a caller-owned value only when the parsed value differs.
//!
//! Invariants:
//! - An unset variable always yields `ParseError` with a not-set cause; there
//!   is no default or zero value on failure.
//! - `override_var` leaves the destination untouched on any error.

use crate::env::{Environment, ProcessEnv};
use crate::error::{ConversionError, ParseError};

/// Parses the process variable `name` with `convert`.
///
/// ```no_run
/// let workers: i64 = envkit::parse("WORKERS", envkit::convert::int)?;
/// # Ok::<(), envkit::ParseError>(())
/// ```
pub fn parse<T, F>(name: &str, convert: F) -> Result<T, ParseError>
where
    F: FnOnce(&str) -> Result<T, ConversionError>,
{
    parse_with(&ProcessEnv, name, convert)
}

/// Parses the variable `name` from `env` with `convert`.
///
/// # Errors
///
/// - `ParseError { name, NotSet }` if the variable is not set.
/// - `ParseError { name, InvalidValue { value, source } }` if `convert`
///   rejects the value.
/// - `ParseError { name, InvalidValue { value, NotUnicode } }` if the raw
///   value is not valid Unicode; `convert` is not called.
pub fn parse_with<E, T, F>(env: &E, name: &str, convert: F) -> Result<T, ParseError>
where
    E: Environment + ?Sized,
    F: FnOnce(&str) -> Result<T, ConversionError>,
{
    let raw = env.lookup_os(name).ok_or_else(|| ParseError::not_set(name))?;
    let value = raw.into_string().map_err(|raw| {
        ParseError::invalid(name, raw.to_string_lossy(), ConversionError::NotUnicode)
    })?;
    convert(&value).map_err(|err| ParseError::invalid(name, value, err))
}

/// Replaces `dest` with the parsed process variable `name` if it differs.
///
/// Returns `Ok(true)` if `dest` was changed and `Ok(false)` if the parsed
/// value equals the current one. On error `dest` is not modified.
///
/// ```no_run
/// let mut port: u16 = 8080;
/// if envkit::override_var(&mut port, "PORT", envkit::convert::port)? {
///     println!("port overridden to {port}");
/// }
/// # Ok::<(), envkit::ParseError>(())
/// ```
pub fn override_var<T, F>(dest: &mut T, name: &str, convert: F) -> Result<bool, ParseError>
where
    T: PartialEq,
    F: FnOnce(&str) -> Result<T, ConversionError>,
{
    override_var_with(&ProcessEnv, dest, name, convert)
}

/// Replaces `dest` with the parsed variable `name` from `env` if it differs.
pub fn override_var_with<E, T, F>(
    env: &E,
    dest: &mut T,
    name: &str,
    convert: F,
) -> Result<bool, ParseError>
where
    E: Environment + ?Sized,
    T: PartialEq,
    F: FnOnce(&str) -> Result<T, ConversionError>,
{
    let value = parse_with(env, name, convert)?;
    if *dest == value {
        return Ok(false);
    }
    *dest = value;
    Ok(true)
}
