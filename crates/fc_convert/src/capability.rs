//! Text conversion protocols a type can declare, and their detection.
//!
//! | Protocol | Shape | Used by |
//! |---|---|---|
//! | [`Display`] (weak) | produce text, infallible | read path, fallback |
//! | [`TypeMarshaller`] (strong) | produce text, fallible | read path, preferred |
//! | [`TypeUnmarshaller`] | consume text, fallible | write path, required |
//!
//! A type declares a protocol through the matching [`Field`] accessor.
//! Detection looks at the concrete field only; wrappers are resolved first.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::error::Error;
use core::fmt::Display;

use crate::field::Field;

/// Error type returned by user conversion code.
pub type BoxError = Box<dyn Error + Send + Sync>;

// -----------------------------------------------------------------------------
// Protocols

/// Renders a value as text, possibly failing.
///
/// When a type declares both this and [`Display`], this one is used.
pub trait TypeMarshaller {
    fn marshal_text(&self) -> Result<String, BoxError>;
}

/// Parses text into an existing value.
pub trait TypeUnmarshaller {
    fn unmarshal_text(&mut self, text: &str) -> Result<(), BoxError>;
}

// -----------------------------------------------------------------------------
// Detection

/// The text producer selected for a field.
pub enum Renderer<'a> {
    Marshal(&'a dyn TypeMarshaller),
    Stringer(&'a dyn Display),
}

impl Renderer<'_> {
    /// Runs the selected producer. Errors from [`TypeMarshaller`] are
    /// returned as they are.
    #[inline]
    pub fn render(&self) -> Result<String, BoxError> {
        match self {
            Self::Marshal(marshaller) => marshaller.marshal_text(),
            Self::Stringer(stringer) => Ok(stringer.to_string()),
        }
    }
}

/// Picks how `field` renders itself: [`TypeMarshaller`] if declared,
/// otherwise [`Display`], otherwise `None`.
pub fn renderer(field: &dyn Field) -> Option<Renderer<'_>> {
    if let Some(marshaller) = field.as_marshaller() {
        return Some(Renderer::Marshal(marshaller));
    }
    let stringer = field.as_stringer()?;
    log::trace!(
        "`{}` has no TypeMarshaller, rendering through Display",
        field.type_path()
    );
    Some(Renderer::Stringer(stringer))
}

/// Returns the [`TypeUnmarshaller`] declared by `field`, if any.
#[inline]
pub fn parser(field: &mut dyn Field) -> Option<&mut dyn TypeUnmarshaller> {
    field.as_unmarshaller()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldMut, FieldRef};
    use core::fmt;

    struct Both;

    impl Display for Both {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("weak")
        }
    }

    impl TypeMarshaller for Both {
        fn marshal_text(&self) -> Result<String, BoxError> {
            Ok("strong".into())
        }
    }

    impl Field for Both {
        fn field_ref(&self) -> FieldRef<'_> {
            FieldRef::Other(self)
        }
        fn field_mut(&mut self) -> FieldMut<'_> {
            FieldMut::Other(self)
        }
        fn as_marshaller(&self) -> Option<&dyn TypeMarshaller> {
            Some(self)
        }
        fn as_stringer(&self) -> Option<&dyn Display> {
            Some(self)
        }
    }

    struct Nothing;

    impl Field for Nothing {
        fn field_ref(&self) -> FieldRef<'_> {
            FieldRef::Other(self)
        }
        fn field_mut(&mut self) -> FieldMut<'_> {
            FieldMut::Other(self)
        }
    }

    #[test]
    fn strong_marshal_is_preferred() {
        let r = renderer(&Both).unwrap();
        assert!(matches!(r, Renderer::Marshal(_)));
        assert_eq!(r.render().unwrap(), "strong");
    }

    #[test]
    fn no_capabilities() {
        assert!(renderer(&Nothing).is_none());
        assert!(parser(&mut Nothing).is_none());
        assert!(parser(&mut Both).is_none());
    }

    #[test]
    fn primitives_render_and_parse() {
        let r = renderer(&12_u8).unwrap();
        assert!(matches!(r, Renderer::Marshal(_)));
        assert_eq!(r.render().unwrap(), "12");

        let r = renderer(&0.25_f32).unwrap();
        assert_eq!(r.render().unwrap(), "0.25");

        let mut v = 0_i32;
        parser(&mut v).unwrap().unmarshal_text("-0x10").unwrap();
        assert_eq!(v, -16);
    }
}
