use super::int;
use crate::constants::{PORT_MAX, PORT_MIN};
use crate::error::{ConversionError, RangeError};

/// Parses `raw` as a TCP/UDP port number in `0..=65535`.
///
/// Values outside the range fail with `RangeError { min: 0, max: 65535 }`.
pub fn port(raw: &str) -> Result<u16, ConversionError> {
    let value = int(raw)?;
    if !(PORT_MIN..=PORT_MAX).contains(&value) {
        return Err(RangeError::new(PORT_MIN, PORT_MAX).into());
    }
    u16::try_from(value).map_err(|_| RangeError::new(PORT_MIN, PORT_MAX).into())
}
