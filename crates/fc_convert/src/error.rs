use alloc::string::String;
use core::num::{IntErrorKind, ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::capability::BoxError;

// -----------------------------------------------------------------------------
// Error

/// The error returned by [`set_field`](crate::set_field) and
/// [`get_field_as_text`](crate::get_field_as_text).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The field has no primitive rule and does not declare the capability
    /// the conversion needs.
    #[error("no known conversion from {from} to {to}, {reason}")]
    Unsupported {
        from: &'static str,
        to: &'static str,
        reason: &'static str,
    },

    /// A token could not be parsed as the target primitive, or the parsed
    /// value does not fit the field.
    #[error("cannot convert {input:?} to {target}: {reason}")]
    Parse {
        input: String,
        target: &'static str,
        reason: ParseReason,
    },

    /// Returned by a user [`TypeMarshaller`](crate::TypeMarshaller) or
    /// [`TypeUnmarshaller`](crate::TypeUnmarshaller), unchanged.
    #[error(transparent)]
    Capability(BoxError),
}

/// Why a [`ConvertError::Parse`] happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseReason {
    #[error("expected one of true, yes, 1, false, no, 0")]
    InvalidBool,

    #[error("invalid syntax")]
    Syntax,

    #[error("value out of range")]
    OutOfRange,

    #[error(transparent)]
    Int(ParseIntError),

    #[error(transparent)]
    Float(ParseFloatError),
}

impl From<ParseIntError> for ParseReason {
    #[inline]
    fn from(value: ParseIntError) -> Self {
        match value.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Self::OutOfRange,
            _ => Self::Int(value),
        }
    }
}

impl From<ParseFloatError> for ParseReason {
    #[inline]
    fn from(value: ParseFloatError) -> Self {
        Self::Float(value)
    }
}

impl From<BoxError> for ConvertError {
    /// Wraps an error from user conversion code.
    ///
    /// A [`ConvertError`] that was boxed on the way out (for example by a
    /// user type delegating to [`set_field`](crate::set_field)) is unboxed
    /// rather than nested.
    fn from(value: BoxError) -> Self {
        match value.downcast::<ConvertError>() {
            Ok(inner) => *inner,
            Err(other) => Self::Capability(other),
        }
    }
}

impl ConvertError {
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    #[inline]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    #[inline]
    pub fn is_capability(&self) -> bool {
        matches!(self, Self::Capability(_))
    }

    #[cold]
    pub(crate) fn parse(input: &str, target: &'static str, reason: impl Into<ParseReason>) -> Self {
        Self::Parse {
            input: input.into(),
            target,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;
    use alloc::string::ToString;
    use core::fmt;

    #[derive(Debug)]
    struct Custom;

    impl fmt::Display for Custom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("custom failure")
        }
    }

    impl core::error::Error for Custom {}

    #[test]
    fn overflow_is_out_of_range() {
        let err = "99999999999999999999".parse::<u64>().unwrap_err();
        assert_eq!(ParseReason::from(err), ParseReason::OutOfRange);

        let err = "x".parse::<u64>().unwrap_err();
        assert!(matches!(ParseReason::from(err), ParseReason::Int(_)));
    }

    #[test]
    fn capability_error_is_transparent() {
        let err = ConvertError::from(Box::new(Custom) as BoxError);
        assert!(err.is_capability());
        assert_eq!(err.to_string(), "custom failure");
    }

    #[test]
    fn boxed_convert_error_is_unwrapped() {
        let inner = ConvertError::parse("maybe", "bool", ParseReason::InvalidBool);
        let err = ConvertError::from(Box::new(inner) as BoxError);
        assert!(err.is_parse());
        assert_eq!(
            err.to_string(),
            "cannot convert \"maybe\" to bool: expected one of true, yes, 1, false, no, 0"
        );
    }
}
