use alloc::string::String;

use crate::error::ConvertError;
use crate::field::{Field, FieldMut, FieldRef, Primitive};
use crate::primitive;
use crate::resolve;

// -----------------------------------------------------------------------------
// Write

/// Converts `token` and stores the result into `field`.
///
/// Primitive fields are parsed directly. Every other field is resolved
/// through its wrappers, allocating a default value into each empty layer,
/// and then parsed by the [`TypeUnmarshaller`] the concrete type declares.
///
/// On error the field keeps its previous value, except that layers
/// allocated on the way stay allocated.
///
/// # Examples
///
/// ```
/// let mut port = 0_u16;
/// fc_convert::set_field(&mut port, "0x1F90").unwrap();
/// assert_eq!(port, 8080);
///
/// let mut limit: Option<u32> = None;
/// fc_convert::set_field(&mut limit, "25").unwrap();
/// assert_eq!(limit, Some(25));
///
/// let mut flag = false;
/// assert!(fc_convert::set_field(&mut flag, "maybe").is_err());
/// ```
///
/// [`TypeUnmarshaller`]: crate::TypeUnmarshaller
pub fn set_field(field: &mut dyn Field, token: &str) -> Result<(), ConvertError> {
    let input = Primitive::Text(token);
    match field.field_mut() {
        FieldMut::Text(text) => {
            *text = primitive::to_text(input);
            Ok(())
        }
        FieldMut::Bool(b) => {
            *b = primitive::to_bool(input)?;
            Ok(())
        }
        FieldMut::Int(slot) => slot.store_int(primitive::to_int(input)?),
        FieldMut::Uint(slot) => slot.store_uint(primitive::to_uint(input)?),
        FieldMut::Float(slot) => slot.store_float(primitive::to_float(input)?),
        FieldMut::Other(other) => resolve::unmarshal(other, token),
    }
}

// -----------------------------------------------------------------------------
// Read

/// Renders `field` as text.
///
/// Primitive fields use their canonical form (see [`primitive::to_text`]).
/// Every other field is resolved through its wrappers; an empty layer
/// renders as `""`. The concrete value is rendered by its
/// [`TypeMarshaller`], or by [`Display`] if it declares no marshaller.
///
/// # Examples
///
/// ```
/// assert_eq!(fc_convert::get_field_as_text(&-7_i8).unwrap(), "-7");
/// assert_eq!(fc_convert::get_field_as_text(&Some(2.5_f64)).unwrap(), "2.5");
/// assert_eq!(fc_convert::get_field_as_text(&None::<bool>).unwrap(), "");
/// ```
///
/// [`TypeMarshaller`]: crate::TypeMarshaller
/// [`Display`]: core::fmt::Display
pub fn get_field_as_text(field: &dyn Field) -> Result<String, ConvertError> {
    match field.field_ref() {
        FieldRef::Primitive(value) => Ok(primitive::to_text(value)),
        FieldRef::Other(other) => resolve::marshal(other),
    }
}
