use crate::error::ConversionError;

/// Parses `raw` as a base-10 signed integer.
pub fn int(raw: &str) -> Result<i64, ConversionError> {
    Ok(raw.parse::<i64>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_int() {
        assert_eq!(int("123").unwrap(), 123);
        assert_eq!(int("-7").unwrap(), -7);
        assert_eq!(int("+7").unwrap(), 7);
    }

    #[test]
    fn test_int_when_conversion_fails() {
        for raw in ["not-a-number", "", "1.5", " 1", "1h"] {
            let err = int(raw).unwrap_err();
            assert!(err.is_syntax(), "{raw:?} should be a syntax error, got {err}");
        }
    }

    #[test]
    fn test_int_overflow_is_out_of_range() {
        let err = int("9223372036854775808").unwrap_err();
        assert!(err.is_out_of_range());
        assert!(!err.is_syntax());
    }

    proptest! {
        #[test]
        fn prop_int_round_trips_decimal_strings(value in any::<i64>()) {
            prop_assert_eq!(int(&value.to_string()).unwrap(), value);
        }

        #[test]
        fn prop_int_rejects_alphabetic_input(raw in "[a-zA-Z]{1,12}") {
            prop_assert!(int(&raw).unwrap_err().is_syntax());
        }
    }
}
