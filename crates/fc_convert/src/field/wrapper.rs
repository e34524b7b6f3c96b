use crate::field::Field;

// -----------------------------------------------------------------------------
// Wrapper

/// An optional or pointer-like layer around another [`Field`].
///
/// A wrapper is either empty or holds exactly one inner field, which may
/// itself be a wrapper. Wrappers are walked by the resolver and never declare
/// capabilities of their own.
///
/// Implemented for `Option<T>` and `Box<T>`.
pub trait Wrapper {
    /// The inner field, or `None` if this layer is empty.
    fn get(&self) -> Option<&dyn Field>;

    /// Returns the inner field, first storing a default value into this
    /// layer if it is empty.
    fn get_or_insert_default(&mut self) -> &mut dyn Field;

    /// The type name of the wrapped value.
    fn inner_type_path(&self) -> &'static str;

    #[inline]
    fn is_empty(&self) -> bool {
        self.get().is_none()
    }
}
