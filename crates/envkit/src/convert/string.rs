use crate::error::ConversionError;

/// Returns `raw` unchanged.
///
/// Lets code that always takes a conversion function read plain strings.
pub fn string(raw: &str) -> Result<String, ConversionError> {
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string() {
        assert_eq!(string("value").unwrap(), "value");
        assert_eq!(string("").unwrap(), "");
        assert_eq!(string(" padded ").unwrap(), " padded ");
    }
}
