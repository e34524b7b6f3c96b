//! Conversions between the five primitive kinds and their canonical text.
//!
//! Every function takes a [`Primitive`] of any kind and produces the target
//! kind. Text input is parsed; other inputs are converted numerically.
//!
//! | from \ to | text | bool | int | uint | float |
//! |---|---|---|---|---|---|
//! | text | identity | literal | radix parse | radix parse | parse |
//! | bool | `true`/`false` | identity | 1/0 | 1/0 | 1.0/0.0 |
//! | int | decimal | nonzero | identity | `as` | widen |
//! | uint | decimal | nonzero | `as` | identity | widen |
//! | float | fixed-point | nonzero | truncate | truncate | identity |

use alloc::string::{String, ToString};

use crate::error::{ConvertError, ParseReason};
use crate::field::Primitive;

// -----------------------------------------------------------------------------
// To text

/// Renders a primitive as its canonical text.
///
/// Integers are written as decimal digits. Floats are written in fixed-point
/// notation with the shortest digits that read back to the same value at the
/// value's own width, never with an exponent.
///
/// # Examples
///
/// ```
/// use fc_convert::{Primitive, primitive::to_text};
///
/// assert_eq!(to_text(Primitive::Int(1234567890123)), "1234567890123");
/// assert_eq!(to_text(Primitive::Bool(false)), "false");
/// assert_eq!(to_text(Primitive::Float(1e21)), "1000000000000000000000");
/// assert_eq!(to_text(Primitive::Float32(0.1)), "0.1");
/// ```
pub fn to_text(value: Primitive<'_>) -> String {
    match value {
        Primitive::Text(text) => text.into(),
        Primitive::Bool(true) => "true".into(),
        Primitive::Bool(false) => "false".into(),
        Primitive::Int(int) => int.to_string(),
        Primitive::Uint(uint) => uint.to_string(),
        Primitive::Float(float) => float.to_string(),
        Primitive::Float32(float) => float.to_string(),
    }
}

// -----------------------------------------------------------------------------
// To bool

/// Converts a primitive to `bool`.
///
/// Text accepts exactly `true`, `yes`, `1`, `false`, `no` and `0`.
/// Numbers are `true` when nonzero.
pub fn to_bool(value: Primitive<'_>) -> Result<bool, ConvertError> {
    match value {
        Primitive::Text("true" | "yes" | "1") => Ok(true),
        Primitive::Text("false" | "no" | "0") => Ok(false),
        Primitive::Text(text) => Err(ConvertError::parse(text, "bool", ParseReason::InvalidBool)),
        Primitive::Bool(b) => Ok(b),
        Primitive::Int(int) => Ok(int != 0),
        Primitive::Uint(uint) => Ok(uint != 0),
        Primitive::Float(float) => Ok(float != 0.0),
        Primitive::Float32(float) => Ok(float != 0.0),
    }
}

// -----------------------------------------------------------------------------
// To int

/// Converts a primitive to `i64`.
///
/// Text may carry a sign followed by a radix prefix (`0x`, `0o`, `0b`, or a
/// bare leading `0` for octal). Floats are truncated toward zero.
///
/// # Examples
///
/// ```
/// use fc_convert::{Primitive, primitive::to_int};
///
/// assert_eq!(to_int(Primitive::Text("-0x1f")).unwrap(), -31);
/// assert_eq!(to_int(Primitive::Text("010")).unwrap(), 8);
/// assert_eq!(to_int(Primitive::Float(-2.9)).unwrap(), -2);
/// assert!(to_int(Primitive::Text("12a")).is_err());
/// ```
pub fn to_int(value: Primitive<'_>) -> Result<i64, ConvertError> {
    match value {
        Primitive::Text(text) => parse_int(text).map_err(|reason| ConvertError::parse(text, "int", reason)),
        Primitive::Bool(b) => Ok(i64::from(b)),
        Primitive::Int(int) => Ok(int),
        Primitive::Uint(uint) => Ok(uint as i64),
        Primitive::Float(float) => Ok(float as i64),
        Primitive::Float32(float) => Ok(float as i64),
    }
}

// -----------------------------------------------------------------------------
// To uint

/// Converts a primitive to `u64`.
///
/// Text follows the same radix rules as [`to_int`] but must not carry a
/// sign, so `"-1"` is rejected.
pub fn to_uint(value: Primitive<'_>) -> Result<u64, ConvertError> {
    match value {
        Primitive::Text(text) => parse_uint(text).map_err(|reason| ConvertError::parse(text, "uint", reason)),
        Primitive::Bool(b) => Ok(u64::from(b)),
        Primitive::Int(int) => Ok(int as u64),
        Primitive::Uint(uint) => Ok(uint),
        Primitive::Float(float) => Ok(float as u64),
        Primitive::Float32(float) => Ok(float as u64),
    }
}

// -----------------------------------------------------------------------------
// To float

/// Converts a primitive to `f64`.
///
/// Text that is finite but too large for `f64` is out of range. Only the
/// literals `inf` and `infinity` (any case, optionally signed) produce an
/// infinite value.
pub fn to_float(value: Primitive<'_>) -> Result<f64, ConvertError> {
    match value {
        Primitive::Text(text) => parse_float(text).map_err(|reason| ConvertError::parse(text, "float", reason)),
        Primitive::Bool(true) => Ok(1.0),
        Primitive::Bool(false) => Ok(0.0),
        Primitive::Int(int) => Ok(int as f64),
        Primitive::Uint(uint) => Ok(uint as f64),
        Primitive::Float(float) => Ok(float),
        Primitive::Float32(float) => Ok(f64::from(float)),
    }
}

// -----------------------------------------------------------------------------
// Float parsing

fn parse_float(text: &str) -> Result<f64, ParseReason> {
    let value = text.parse::<f64>()?;
    if value.is_infinite() && !is_infinity_literal(text) {
        return Err(ParseReason::OutOfRange);
    }
    Ok(value)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

// -----------------------------------------------------------------------------
// Integer parsing

/// Splits a radix prefix off `digits`.
fn split_radix(digits: &str) -> (u32, &str) {
    let bytes = digits.as_bytes();
    match bytes {
        [b'0', b'x' | b'X', ..] => (16, &digits[2..]),
        [b'0', b'o' | b'O', ..] => (8, &digits[2..]),
        [b'0', b'b' | b'B', ..] => (2, &digits[2..]),
        [b'0', _, ..] => (8, &digits[1..]),
        _ => (10, digits),
    }
}

fn parse_uint(text: &str) -> Result<u64, ParseReason> {
    let (radix, digits) = split_radix(text);
    // `from_str_radix` accepts a leading `+`, the text format does not.
    if digits.starts_with(['+', '-']) {
        return Err(ParseReason::Syntax);
    }
    Ok(u64::from_str_radix(digits, radix)?)
}

fn parse_int(text: &str) -> Result<i64, ParseReason> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = i128::from(parse_uint(unsigned)?);
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| ParseReason::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_text_is_decimal_digits() {
        assert_eq!(to_text(Primitive::Int(1234567890123)), "1234567890123");
        assert_eq!(to_text(Primitive::Int(65)), "65");
        assert_eq!(to_text(Primitive::Uint(u64::MAX)), "18446744073709551615");
        assert_eq!(to_text(Primitive::Int(i64::MIN)), "-9223372036854775808");
    }

    #[test]
    fn float_text_is_fixed_point() {
        assert_eq!(to_text(Primitive::Float(0.1)), "0.1");
        assert_eq!(to_text(Primitive::Float(-2.0)), "-2");
        assert_eq!(to_text(Primitive::Float(1e-7)), "0.0000001");
        assert!(!to_text(Primitive::Float(1.5e300)).contains('e'));
    }

    #[test]
    fn float32_text_keeps_its_width() {
        assert_eq!(to_text(Primitive::Float32(0.1)), "0.1");
        assert_eq!(to_text(Primitive::Float32(-2.5)), "-2.5");
        assert_eq!(to_float(Primitive::Float32(0.5)).unwrap(), 0.5);
        assert_eq!(to_int(Primitive::Float32(-7.9)).unwrap(), -7);
        assert!(to_bool(Primitive::Float32(1.0)).unwrap());
    }

    #[test]
    fn bool_literals() {
        assert!(to_bool(Primitive::Text("yes")).unwrap());
        assert!(to_bool(Primitive::Text("1")).unwrap());
        assert!(!to_bool(Primitive::Text("no")).unwrap());
        assert!(!to_bool(Primitive::Text("0")).unwrap());

        let err = to_bool(Primitive::Text("maybe")).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Parse {
                reason: ParseReason::InvalidBool,
                ..
            }
        ));
        // Case matters.
        assert!(to_bool(Primitive::Text("TRUE")).is_err());
    }

    #[test]
    fn bool_from_numbers() {
        assert!(to_bool(Primitive::Int(-3)).unwrap());
        assert!(!to_bool(Primitive::Uint(0)).unwrap());
        assert!(to_bool(Primitive::Float(0.01)).unwrap());
        assert!(!to_bool(Primitive::Float(0.0)).unwrap());
    }

    #[test]
    fn int_radix_prefixes() {
        assert_eq!(to_int(Primitive::Text("42")).unwrap(), 42);
        assert_eq!(to_int(Primitive::Text("+42")).unwrap(), 42);
        assert_eq!(to_int(Primitive::Text("0x2A")).unwrap(), 42);
        assert_eq!(to_int(Primitive::Text("052")).unwrap(), 42);
        assert_eq!(to_int(Primitive::Text("0o52")).unwrap(), 42);
        assert_eq!(to_int(Primitive::Text("0b101010")).unwrap(), 42);
        assert_eq!(to_int(Primitive::Text("-0x2a")).unwrap(), -42);
        assert_eq!(to_int(Primitive::Text("0")).unwrap(), 0);
    }

    #[test]
    fn int_rejects() {
        for bad in ["", "-", "0x", "08", "0x-1", "--1", "1.5", " 1"] {
            assert!(to_int(Primitive::Text(bad)).unwrap_err().is_parse(), "{bad:?}");
        }
    }

    #[test]
    fn int_range() {
        assert_eq!(
            to_int(Primitive::Text("-9223372036854775808")).unwrap(),
            i64::MIN
        );
        let err = to_int(Primitive::Text("9223372036854775808")).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Parse {
                reason: ParseReason::OutOfRange,
                ..
            }
        ));
    }

    #[test]
    fn int_from_other_kinds() {
        assert_eq!(to_int(Primitive::Bool(true)).unwrap(), 1);
        assert_eq!(to_int(Primitive::Uint(7)).unwrap(), 7);
        assert_eq!(to_int(Primitive::Float(3.99)).unwrap(), 3);
        assert_eq!(to_int(Primitive::Float(-3.99)).unwrap(), -3);
    }

    #[test]
    fn uint_rejects_sign() {
        let err = to_uint(Primitive::Text("-1")).unwrap_err();
        assert!(err.is_parse());
        assert!(to_uint(Primitive::Text("+1")).is_err());
        assert!(to_uint(Primitive::Text("18446744073709551616")).is_err());
        assert_eq!(to_uint(Primitive::Text("0xff")).unwrap(), 255);
    }

    #[test]
    fn float_parse() {
        assert_eq!(to_float(Primitive::Text("2.5")).unwrap(), 2.5);
        assert_eq!(to_float(Primitive::Text("-1e3")).unwrap(), -1000.0);
        assert!(to_float(Primitive::Text("abc")).unwrap_err().is_parse());
        assert_eq!(to_float(Primitive::Bool(true)).unwrap(), 1.0);
        assert_eq!(to_float(Primitive::Int(-4)).unwrap(), -4.0);
        assert_eq!(to_float(Primitive::Uint(1 << 53)).unwrap(), 9007199254740992.0);
    }

    #[test]
    fn float_overflow_is_out_of_range() {
        for big in ["1e400", "-1e400", "1.8e308"] {
            let err = to_float(Primitive::Text(big)).unwrap_err();
            assert!(
                matches!(
                    err,
                    ConvertError::Parse {
                        target: "float",
                        reason: ParseReason::OutOfRange,
                        ..
                    }
                ),
                "{big:?}"
            );
        }

        assert_eq!(to_float(Primitive::Text("inf")).unwrap(), f64::INFINITY);
        assert_eq!(to_float(Primitive::Text("-Infinity")).unwrap(), f64::NEG_INFINITY);
        assert!(to_float(Primitive::Text("NaN")).unwrap().is_nan());
        assert_eq!(to_float(Primitive::Text("1.7976931348623157e308")).unwrap(), f64::MAX);
    }

    #[test]
    fn round_trip() {
        for v in [true, false] {
            assert_eq!(to_bool(Primitive::Text(&to_text(Primitive::Bool(v)))).unwrap(), v);
        }
        for v in [0, -1, i64::MAX, i64::MIN, 1234567890123] {
            assert_eq!(to_int(Primitive::Text(&to_text(Primitive::Int(v)))).unwrap(), v);
        }
        for v in [0, 1, u64::MAX] {
            assert_eq!(to_uint(Primitive::Text(&to_text(Primitive::Uint(v)))).unwrap(), v);
        }
        for v in [0.0, -0.5, 0.1, 1e-300, 1.7976931348623157e308, f64::MIN_POSITIVE] {
            assert_eq!(to_float(Primitive::Text(&to_text(Primitive::Float(v)))).unwrap(), v);
        }
    }
}
