use alloc::string::String;

use crate::capability::{BoxError, TypeMarshaller, TypeUnmarshaller};
use crate::field::{Field, FieldMut, FieldRef, Primitive};

// Primitives declare marshal and parse so that a primitive reached through
// a wrapper (`Option<u32>`, `Box<String>`) converts like a bare one.
macro_rules! impl_primitive_field {
    ($kind:ident: $($ty:ty => |$this:ident| $read:expr),* $(,)?) => {$(
        impl Field for $ty {
            #[inline]
            fn field_ref(&self) -> FieldRef<'_> {
                let $this = self;
                FieldRef::Primitive($read)
            }

            #[inline]
            fn field_mut(&mut self) -> FieldMut<'_> {
                FieldMut::$kind(self)
            }

            #[inline]
            fn as_marshaller(&self) -> Option<&dyn TypeMarshaller> {
                Some(self)
            }

            #[inline]
            fn as_unmarshaller(&mut self) -> Option<&mut dyn TypeUnmarshaller> {
                Some(self)
            }
        }

        impl TypeMarshaller for $ty {
            fn marshal_text(&self) -> Result<String, BoxError> {
                crate::get_field_as_text(self).map_err(BoxError::from)
            }
        }

        impl TypeUnmarshaller for $ty {
            fn unmarshal_text(&mut self, text: &str) -> Result<(), BoxError> {
                crate::set_field(self, text).map_err(BoxError::from)
            }
        }
    )*};
}

impl_primitive_field!(Text: String => |this| Primitive::Text(this.as_str()));
impl_primitive_field!(Bool: bool => |this| Primitive::Bool(*this));
impl_primitive_field!(Int:
    i8 => |this| Primitive::Int(i64::from(*this)),
    i16 => |this| Primitive::Int(i64::from(*this)),
    i32 => |this| Primitive::Int(i64::from(*this)),
    i64 => |this| Primitive::Int(*this),
    isize => |this| Primitive::Int(*this as i64),
);
impl_primitive_field!(Uint:
    u8 => |this| Primitive::Uint(u64::from(*this)),
    u16 => |this| Primitive::Uint(u64::from(*this)),
    u32 => |this| Primitive::Uint(u64::from(*this)),
    u64 => |this| Primitive::Uint(*this),
    usize => |this| Primitive::Uint(*this as u64),
);
impl_primitive_field!(Float:
    f64 => |this| Primitive::Float(*this),
    f32 => |this| Primitive::Float32(*this),
);
