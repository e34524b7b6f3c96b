//! The runtime view of a single record field.
//!
//! ## Menu
//!
//! - [`Field`]: A trait for a storage location whose type the engine does not know.
//! - [`FieldKind`]: The coarse category of a field, one of five primitives or `Other`.
//! - [`Primitive`]: A read-only primitive value, integers widened to 64 bits.
//! - [`FieldRef`]: An immutable enumeration of a field, primitive or other.
//! - [`FieldMut`]: A mutable enumeration of a field, holding a typed slot for primitives.
//! - Slots, used to store a widened value back into a concrete-width field:
//!     - [`IntSlot`]: `i8`-`i64`, `isize`.
//!     - [`UintSlot`]: `u8`-`u64`, `usize`.
//!     - [`FloatSlot`]: `f32`, `f64`.
//! - [`Wrapper`]: An optional or pointer-like layer around another field.

// -----------------------------------------------------------------------------
// Modules

mod field;
mod kind;
mod slot;
mod wrapper;

// -----------------------------------------------------------------------------
// Exports

pub use field::Field;
pub use kind::{FieldKind, FieldMut, FieldRef, Primitive};
pub use slot::{FloatSlot, IntSlot, UintSlot};
pub use wrapper::Wrapper;
