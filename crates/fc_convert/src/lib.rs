#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Code generated by `#[derive(Field)]` names this crate as `::fc_convert`,
// including when the derive is used by this crate's own tests.
extern crate self as fc_convert;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod bridge;
mod error;
mod resolve;

pub mod capability;
pub mod field;
pub mod impls;
pub mod primitive;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use bridge::{get_field_as_text, set_field};
pub use capability::{BoxError, TypeMarshaller, TypeUnmarshaller};
pub use error::{ConvertError, ParseReason};
pub use field::{Field, FieldKind, FieldMut, FieldRef, Primitive, Wrapper};

/// Derive macros, enabled by the `derive` feature.
#[cfg(feature = "derive")]
pub mod derive {
    pub use fc_convert_derive::Field;
}
