use core::any::{Any, TypeId};
use core::fmt::Display;

use crate::capability::{TypeMarshaller, TypeUnmarshaller};
use crate::field::{FieldKind, FieldMut, FieldRef, Wrapper};

// -----------------------------------------------------------------------------
// Field

/// A single storage location whose concrete type the engine does not know.
///
/// This is the "field reference" handed to [`set_field`] and
/// [`get_field_as_text`]. The engine only sees a field through three views:
///
/// - its [kind](Field::field_kind), which picks between the primitive
///   converter and the resolver;
/// - [`field_ref`](Field::field_ref) / [`field_mut`](Field::field_mut), which
///   expose primitive values and slots;
/// - optional accessors for [wrappers](Field::as_wrapper) and the three
///   capabilities ([`as_marshaller`], [`as_stringer`], [`as_unmarshaller`]).
///
/// Capabilities describe the type, not the value: an implementation returns
/// either always `Some(self)` or always `None`.
///
/// # Implementation
///
/// Use [`#[derive(Field)]`](crate::derive::Field) for user types. A manual
/// implementation looks like this:
///
/// ```
/// use core::fmt;
/// use fc_convert::{Field, FieldMut, FieldRef};
///
/// struct Celsius(f64);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}C", self.0)
///     }
/// }
///
/// impl Field for Celsius {
///     fn field_ref(&self) -> FieldRef<'_> {
///         FieldRef::Other(self)
///     }
///
///     fn field_mut(&mut self) -> FieldMut<'_> {
///         FieldMut::Other(self)
///     }
///
///     fn as_stringer(&self) -> Option<&dyn fmt::Display> {
///         Some(self)
///     }
/// }
///
/// let text = fc_convert::get_field_as_text(&Celsius(21.5)).unwrap();
/// assert_eq!(text, "21.5C");
/// ```
///
/// [`set_field`]: crate::set_field
/// [`get_field_as_text`]: crate::get_field_as_text
/// [`as_marshaller`]: Field::as_marshaller
/// [`as_stringer`]: Field::as_stringer
/// [`as_unmarshaller`]: Field::as_unmarshaller
pub trait Field: Any {
    /// Returns an immutable enumeration of this field.
    fn field_ref(&self) -> FieldRef<'_>;

    /// Returns a mutable enumeration of this field.
    ///
    /// Must be the same variant as [`field_ref`](Field::field_ref).
    fn field_mut(&mut self) -> FieldMut<'_>;

    /// Returns the coarse kind of this field, as seen by
    /// [`field_ref`](Field::field_ref).
    #[inline]
    fn field_kind(&self) -> FieldKind {
        self.field_ref().kind()
    }

    /// The type name used in error messages.
    #[inline]
    fn type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns this field as an optional or pointer-like layer, if it is one.
    #[inline]
    fn as_wrapper(&self) -> Option<&dyn Wrapper> {
        None
    }

    /// Mutable version of [`as_wrapper`](Field::as_wrapper).
    #[inline]
    fn as_wrapper_mut(&mut self) -> Option<&mut dyn Wrapper> {
        None
    }

    /// Strong text rendering. Preferred over [`as_stringer`](Field::as_stringer).
    #[inline]
    fn as_marshaller(&self) -> Option<&dyn TypeMarshaller> {
        None
    }

    /// Weak, infallible text rendering through [`Display`].
    #[inline]
    fn as_stringer(&self) -> Option<&dyn Display> {
        None
    }

    /// Parsing from text, required on the write path for non-primitive fields.
    #[inline]
    fn as_unmarshaller(&mut self) -> Option<&mut dyn TypeUnmarshaller> {
        None
    }
}

impl dyn Field {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        (self as &dyn Any).type_id() == TypeId::of::<T>()
    }

    /// Downcasts the field to a concrete type by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Downcasts the field to a concrete type by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn downcast() {
        let mut value = 42_u16;
        let field: &mut dyn Field = &mut value;

        assert!(field.is::<u16>());
        assert!(!field.is::<u32>());
        assert!(field.downcast_ref::<i32>().is_none());

        *field.downcast_mut::<u16>().unwrap() = 7;
        assert_eq!(value, 7);
    }

    #[test]
    fn type_path_names_the_concrete_type() {
        let value = String::new();
        let field: &dyn Field = &value;
        assert_eq!(field.type_path(), "alloc::string::String");
    }
}
