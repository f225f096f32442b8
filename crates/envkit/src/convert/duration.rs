use time::Duration;

use super::int;
use crate::error::{ConversionError, DurationError};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Largest magnitude, in nanoseconds, a parsed duration may have.
const MAX_NANOS: u128 = i64::MAX as u128;

/// Fraction digits beyond this precision cannot change a nanosecond result.
const MAX_FRACTION_DIGITS: u32 = 18;

/// Parses a composite duration such as `1h30m`, `1.5s` or `-300ms`.
///
/// The grammar is an optional sign followed by one or more
/// `<decimal><unit>` groups, where a decimal may carry a fraction and the
/// unit is one of `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. A bare `0` is
/// zero. The magnitude is limited to what fits in `i64` nanoseconds.
pub fn duration(raw: &str) -> Result<Duration, ConversionError> {
    Ok(parse_composite(raw)?)
}

/// Parses `raw` as an integer count of `unit`.
///
/// Suffixed input such as `1h` is rejected with the integer syntax error.
pub fn duration_in(raw: &str, unit: Duration) -> Result<Duration, ConversionError> {
    let count = int(raw)?;
    unit.whole_nanoseconds()
        .checked_mul(i128::from(count))
        .and_then(|nanos| i64::try_from(nanos).ok())
        .map(Duration::nanoseconds)
        .ok_or_else(|| DurationError::Overflow(raw.to_string()).into())
}

/// Parses `raw` as [`duration`] when `units` is empty, otherwise as
/// [`duration_in`] with `units[0]`; further units are ignored.
pub fn duration_with(raw: &str, units: &[Duration]) -> Result<Duration, ConversionError> {
    match units.first() {
        Some(unit) => duration_in(raw, *unit),
        None => duration(raw),
    }
}

fn parse_composite(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());
    let overflow = || DurationError::Overflow(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        if !rest.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid());
        }

        let (whole, after_whole) = split_digits(rest);
        let mut fraction = "";
        rest = after_whole;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, after_fraction) = split_digits(after_dot);
            fraction = digits;
            rest = after_fraction;
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (unit, after_unit) = rest.split_at(unit_len);
        rest = after_unit;
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let unit_nanos = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let whole_value = parse_whole(whole).ok_or_else(overflow)?;
        let mut value = whole_value.checked_mul(unit_nanos).ok_or_else(overflow)?;
        value += fraction_nanos(fraction, unit_nanos);

        total = total.checked_add(value).ok_or_else(overflow)?;
        if total > MAX_NANOS {
            return Err(overflow());
        }
    }

    // `total <= i64::MAX`, so the conversion and the negation cannot fail.
    let nanos = total as i64;
    Ok(Duration::nanoseconds(if negative { -nanos } else { nanos }))
}

/// Splits off the leading run of ASCII digits.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn parse_whole(digits: &str) -> Option<u128> {
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse::<u128>().ok().filter(|v| *v <= MAX_NANOS)
}

/// Converts the digits after a decimal point into nanoseconds of `unit_nanos`.
fn fraction_nanos(digits: &str, unit_nanos: u128) -> u128 {
    let significant = &digits[..digits.len().min(MAX_FRACTION_DIGITS as usize)];
    if significant.is_empty() {
        return 0;
    }
    let scale = 10u128.pow(significant.len() as u32);
    let numerator: u128 = significant.parse().unwrap_or(0);
    numerator * unit_nanos / scale
}

fn unit_nanos(unit: &str) -> Option<u128> {
    Some(match unit {
        "ns" => 1,
        "us" | "\u{00b5}s" | "\u{03bc}s" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SECOND,
        "m" => NANOS_PER_MINUTE,
        "h" => NANOS_PER_HOUR,
        _ => return None,
    })
}
