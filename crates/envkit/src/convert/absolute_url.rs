use url::Url;

use crate::error::{ConversionError, InvalidValueError};

/// Parses `raw` as an absolute URL.
///
/// Malformed input fails with the parser's own error. A relative reference
/// (no scheme and no host, e.g. `/path`) fails with `NotAbsoluteUrl` wrapped
/// in an [`InvalidValueError`] carrying `raw`.
pub fn absolute_url(raw: &str) -> Result<Url, ConversionError> {
    match Url::parse(raw) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Err(InvalidValueError::new(raw, ConversionError::NotAbsoluteUrl).into())
        }
        Err(err) => Err(err.into()),
    }
}
