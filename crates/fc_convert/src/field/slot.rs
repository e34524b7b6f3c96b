use alloc::string::ToString;

use crate::error::{ConvertError, ParseReason};

// -----------------------------------------------------------------------------
// Slots

/// A signed integer field of any width.
pub trait IntSlot {
    /// Stores `value`, failing if it does not fit the field's width.
    fn store_int(&mut self, value: i64) -> Result<(), ConvertError>;
}

/// An unsigned integer field of any width.
pub trait UintSlot {
    /// Stores `value`, failing if it does not fit the field's width.
    fn store_uint(&mut self, value: u64) -> Result<(), ConvertError>;
}

/// A floating point field of any width.
pub trait FloatSlot {
    /// Stores `value`. Narrower fields round to the nearest representable
    /// value, and fail if a finite `value` exceeds their range.
    fn store_float(&mut self, value: f64) -> Result<(), ConvertError>;
}

macro_rules! impl_int_slot {
    ($trait:ident, $method:ident, $wide:ty: $($ty:ty),*) => {$(
        impl $trait for $ty {
            #[inline]
            fn $method(&mut self, value: $wide) -> Result<(), ConvertError> {
                *self = <$ty>::try_from(value).map_err(|_| ConvertError::Parse {
                    input: value.to_string(),
                    target: stringify!($ty),
                    reason: ParseReason::OutOfRange,
                })?;
                Ok(())
            }
        }
    )*};
}

impl_int_slot!(IntSlot, store_int, i64: i8, i16, i32, i64, isize);
impl_int_slot!(UintSlot, store_uint, u64: u8, u16, u32, u64, usize);

impl FloatSlot for f64 {
    #[inline]
    fn store_float(&mut self, value: f64) -> Result<(), ConvertError> {
        *self = value;
        Ok(())
    }
}

impl FloatSlot for f32 {
    #[inline]
    fn store_float(&mut self, value: f64) -> Result<(), ConvertError> {
        let narrowed = value as f32;
        if narrowed.is_infinite() && value.is_finite() {
            return Err(ConvertError::Parse {
                input: value.to_string(),
                target: "f32",
                reason: ParseReason::OutOfRange,
            });
        }
        *self = narrowed;
        Ok(())
    }
}
