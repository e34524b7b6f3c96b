use alloc::string::String;
use core::fmt;

use crate::field::{Field, FloatSlot, IntSlot, UintSlot};

// -----------------------------------------------------------------------------
// FieldKind

/// The coarse category of a [`Field`].
///
/// The first five variants are primitives and are converted directly by
/// [`crate::primitive`]. Everything else (user types, `Option`, `Box`) is
/// [`Other`](FieldKind::Other) and goes through the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Bool,
    Int,
    Uint,
    Float,
    Other,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.pad("string"),
            Self::Bool => f.pad("bool"),
            Self::Int => f.pad("int"),
            Self::Uint => f.pad("uint"),
            Self::Float => f.pad("float"),
            Self::Other => f.pad("other"),
        }
    }
}

// -----------------------------------------------------------------------------
// Primitive

/// A primitive value as seen by the converter.
///
/// Integers are widened to their 64-bit form, so a `u8` field and a `u64`
/// field look the same here. `f32` keeps its own variant so that it renders
/// with the shortest digits of its own width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    Text(&'a str),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Float32(f32),
}

impl Primitive<'_> {
    /// The [`FieldKind`] of this value. Never [`FieldKind::Other`].
    #[inline]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Bool(_) => FieldKind::Bool,
            Self::Int(_) => FieldKind::Int,
            Self::Uint(_) => FieldKind::Uint,
            Self::Float(_) | Self::Float32(_) => FieldKind::Float,
        }
    }
}

// -----------------------------------------------------------------------------
// FieldRef

/// An immutable enumeration of a field, returned by [`Field::field_ref`].
pub enum FieldRef<'a> {
    Primitive(Primitive<'a>),
    Other(&'a dyn Field),
}

impl FieldRef<'_> {
    #[inline]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Primitive(value) => value.kind(),
            Self::Other(_) => FieldKind::Other,
        }
    }
}

// -----------------------------------------------------------------------------
// FieldMut

/// A mutable enumeration of a field, returned by [`Field::field_mut`].
///
/// Numeric variants hold a slot rather than a plain reference so that one
/// variant covers every width of the same kind.
pub enum FieldMut<'a> {
    Text(&'a mut String),
    Bool(&'a mut bool),
    Int(&'a mut dyn IntSlot),
    Uint(&'a mut dyn UintSlot),
    Float(&'a mut dyn FloatSlot),
    Other(&'a mut dyn Field),
}

impl FieldMut<'_> {
    #[inline]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Bool(_) => FieldKind::Bool,
            Self::Int(_) => FieldKind::Int,
            Self::Uint(_) => FieldKind::Uint,
            Self::Float(_) => FieldKind::Float,
            Self::Other(_) => FieldKind::Other,
        }
    }
}
