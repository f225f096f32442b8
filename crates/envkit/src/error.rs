//! Error taxonomy for variable lookup and conversion.
//!
//! Responsibilities:
//! - Define the not-set, invalid-value and out-of-range error kinds.
//! - Define `ParseError`, the name-scoped wrapper returned by the parse pipeline.
//! - Define `ConversionError`, the failure type shared by all conversion functions.
//! - Provide loose structural matching via explicit `matches` predicates.
//!
//! Does NOT handle:
//! - Loader failures (see `load::error`).
//! - Collection failures (see `vars`).
//!
//! Invariants:
//! - Rendering includes every populated field and omits empty ones; a fully
//!   empty instance renders only its kind label.
//! - In a `matches` template, empty strings, `None` causes and zero ranges are
//!   wildcards. Matching is never expressed through `PartialEq`.

use std::error::Error as StdError;
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::sync::Arc;

use thiserror::Error;

/// The named variable is not present in the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("not set")]
pub struct NotSetError;

/// A value lies outside `min..=max`.
///
/// When both bounds are `T::default()` the error carries no range; it renders
/// as a bare `out of range` and, used as a template, matches any range error
/// of the same type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeError<T> {
    pub min: T,
    pub max: T,
}

impl<T: Default + PartialEq> RangeError<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Returns true if neither bound is populated.
    pub fn is_unbounded(&self) -> bool {
        self.min == T::default() && self.max == T::default()
    }

    pub fn matches(&self, template: &RangeError<T>) -> bool {
        template.is_unbounded() || self == template
    }
}

impl<T: fmt::Display + Default + PartialEq> fmt::Display for RangeError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            return f.write_str("out of range");
        }
        write!(f, "out of range: {} <= (x) <= {}", self.min, self.max)
    }
}

impl<T: fmt::Debug + fmt::Display + Default + PartialEq> StdError for RangeError<T> {}

/// A duration string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

/// Failure reported by a conversion function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    /// Built-in converters parse integers as `i64` before checking bounds, so
    /// their range errors use `i64`. Converters with other bound types return
    /// their `RangeError<T>` through [`custom`](Self::custom) and callers get
    /// it back with [`downcast_ref`](Self::downcast_ref).
    #[error(transparent)]
    OutOfRange(#[from] RangeError<i64>),

    #[error(transparent)]
    Duration(#[from] DurationError),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("not an absolute URL")]
    NotAbsoluteUrl,

    /// The raw value is not valid Unicode and was not passed to the converter.
    #[error("not valid Unicode")]
    NotUnicode,

    #[error(transparent)]
    Invalid(Box<InvalidValueError>),

    /// Failure from a caller-supplied conversion function.
    #[error(transparent)]
    Custom(CustomError),
}

impl ConversionError {
    /// Wraps a caller's error, or a plain message.
    pub fn custom(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Custom(CustomError::new(error))
    }

    /// Returns the caller error of type `T`, looking through `Invalid` wrappers.
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        match self {
            Self::Custom(err) => err.downcast_ref(),
            Self::Invalid(err) => err.source.as_ref()?.downcast_ref(),
            _ => None,
        }
    }

    /// Returns true if the input was not syntactically a value of the target type.
    pub fn is_syntax(&self) -> bool {
        match self {
            Self::Int(err) => matches!(err.kind(), IntErrorKind::Empty | IntErrorKind::InvalidDigit),
            Self::Duration(err) => !matches!(err, DurationError::Overflow(_)),
            Self::NotUnicode => true,
            Self::Invalid(err) => err.source.as_ref().is_some_and(Self::is_syntax),
            _ => false,
        }
    }

    /// Returns true if the input was well formed but outside the representable or allowed range.
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Self::Int(err) => matches!(
                err.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            ),
            Self::OutOfRange(_) | Self::Duration(DurationError::Overflow(_)) => true,
            Self::Invalid(err) => err.source.as_ref().is_some_and(Self::is_out_of_range),
            _ => false,
        }
    }

    /// Reports whether this error, or any error it wraps, matches `template`.
    pub fn matches(&self, template: &ConversionError) -> bool {
        let direct = match (self, template) {
            (Self::Int(err), Self::Int(tpl)) => err.kind() == tpl.kind(),
            (Self::OutOfRange(err), Self::OutOfRange(tpl)) => err.matches(tpl),
            (Self::Duration(err), Self::Duration(tpl)) => err == tpl,
            (Self::Url(err), Self::Url(tpl)) => err == tpl,
            (Self::NotAbsoluteUrl, Self::NotAbsoluteUrl)
            | (Self::NotUnicode, Self::NotUnicode) => true,
            (Self::Invalid(err), Self::Invalid(tpl)) => err.matches(tpl),
            (Self::Custom(err), Self::Custom(tpl)) => {
                let tpl = tpl.to_string();
                tpl.is_empty() || err.to_string() == tpl
            }
            _ => false,
        };

        direct
            || match self {
                Self::Invalid(err) => err
                    .source
                    .as_ref()
                    .is_some_and(|source| source.matches(template)),
                _ => false,
            }
    }
}

/// A caller's conversion error, shared so [`ConversionError`] stays `Clone`.
///
/// Two custom errors compare equal when they render the same text.
#[derive(Debug, Clone)]
pub struct CustomError(Arc<dyn StdError + Send + Sync>);

impl CustomError {
    pub fn new(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self(Arc::from(error.into()))
    }

    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for CustomError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl PartialEq for CustomError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl From<InvalidValueError> for ConversionError {
    fn from(error: InvalidValueError) -> Self {
        Self::Invalid(Box::new(error))
    }
}

/// A raw value that a conversion function rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvalidValueError {
    pub value: String,
    pub source: Option<ConversionError>,
}

impl InvalidValueError {
    pub fn new(value: impl Into<String>, source: ConversionError) -> Self {
        Self {
            value: value.into(),
            source: Some(source),
        }
    }

    /// Reports whether `self` matches `template`.
    ///
    /// An empty template value matches any value; a `None` template source
    /// matches any source, otherwise the source chain must contain a match.
    pub fn matches(&self, template: &InvalidValueError) -> bool {
        let value_matches = template.value.is_empty() || self.value == template.value;
        let source_matches = match (&template.source, &self.source) {
            (None, _) => true,
            (Some(tpl), Some(source)) => source.matches(tpl),
            (Some(_), None) => false,
        };
        value_matches && source_matches
    }
}

impl fmt::Display for InvalidValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid value")?;
        if !self.value.is_empty() {
            write!(f, ": {}", self.value)?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for InvalidValueError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn StdError + 'static))
    }
}

/// Why a variable could not be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseCause {
    #[error(transparent)]
    NotSet(#[from] NotSetError),

    #[error(transparent)]
    InvalidValue(#[from] InvalidValueError),
}

impl ParseCause {
    pub fn matches(&self, template: &ParseCause) -> bool {
        match (self, template) {
            (Self::NotSet(_), Self::NotSet(_)) => true,
            (Self::InvalidValue(err), Self::InvalidValue(tpl)) => err.matches(tpl),
            _ => false,
        }
    }
}

/// Error returned when a named variable cannot be parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseError {
    pub name: String,
    pub cause: Option<ParseCause>,
}

impl ParseError {
    pub fn not_set(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cause: Some(ParseCause::NotSet(NotSetError)),
        }
    }

    pub fn invalid(name: impl Into<String>, value: impl Into<String>, source: ConversionError) -> Self {
        Self {
            name: name.into(),
            cause: Some(ParseCause::InvalidValue(InvalidValueError::new(value, source))),
        }
    }

    pub fn is_not_set(&self) -> bool {
        matches!(self.cause, Some(ParseCause::NotSet(_)))
    }

    pub fn as_invalid_value(&self) -> Option<&InvalidValueError> {
        match &self.cause {
            Some(ParseCause::InvalidValue(err)) => Some(err),
            _ => None,
        }
    }

    /// The error reported by the conversion function, if conversion was attempted.
    pub fn conversion_error(&self) -> Option<&ConversionError> {
        self.as_invalid_value().and_then(|err| err.source.as_ref())
    }

    /// Reports whether `self` matches `template`.
    ///
    /// An empty template name matches any name; a `None` template cause
    /// matches any cause.
    pub fn matches(&self, template: &ParseError) -> bool {
        let name_matches = template.name.is_empty() || self.name == template.name;
        let cause_matches = match (&template.cause, &self.cause) {
            (None, _) => true,
            (Some(tpl), Some(cause)) => cause.matches(tpl),
            (Some(_), None) => false,
        };
        name_matches && cause_matches
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("parse error")?;
        if !self.name.is_empty() {
            write!(f, ": {}", self.name)?;
        }
        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|e| e as &(dyn StdError + 'static))
    }
}

/// The host refused to set or unset a variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("invalid variable name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("invalid value for variable {name}: {reason}")]
    InvalidValue { name: String, reason: &'static str },
}
