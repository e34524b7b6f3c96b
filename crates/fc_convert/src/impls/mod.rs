//! [`Field`](crate::Field) implementations for foreign types.
//!
//! ## Implemented Menu
//!
//! - primitives: `String`, `bool`, `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`
//! - wrappers: `Option<T>` (`T: Default`), `Box<T>`

mod primitive;
mod wrapper;
