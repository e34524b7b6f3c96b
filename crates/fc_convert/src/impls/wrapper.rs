use alloc::boxed::Box;
use core::any::type_name;

use crate::field::{Field, FieldMut, FieldRef, Wrapper};

// -----------------------------------------------------------------------------
// Option

impl<T: Field + Default> Wrapper for Option<T> {
    #[inline]
    fn get(&self) -> Option<&dyn Field> {
        self.as_ref().map(|inner| inner as &dyn Field)
    }

    #[inline]
    fn get_or_insert_default(&mut self) -> &mut dyn Field {
        self.get_or_insert_with(T::default)
    }

    #[inline]
    fn inner_type_path(&self) -> &'static str {
        type_name::<T>()
    }
}

impl<T: Field + Default> Field for Option<T> {
    #[inline]
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Other(self)
    }

    #[inline]
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Other(self)
    }

    #[inline]
    fn as_wrapper(&self) -> Option<&dyn Wrapper> {
        Some(self)
    }

    #[inline]
    fn as_wrapper_mut(&mut self) -> Option<&mut dyn Wrapper> {
        Some(self)
    }
}

// -----------------------------------------------------------------------------
// Box

// A box is never empty, so nothing is ever allocated through it.
impl<T: Field> Wrapper for Box<T> {
    #[inline]
    fn get(&self) -> Option<&dyn Field> {
        Some(&**self)
    }

    #[inline]
    fn get_or_insert_default(&mut self) -> &mut dyn Field {
        &mut **self
    }

    #[inline]
    fn inner_type_path(&self) -> &'static str {
        type_name::<T>()
    }
}

impl<T: Field> Field for Box<T> {
    #[inline]
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Other(self)
    }

    #[inline]
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Other(self)
    }

    #[inline]
    fn as_wrapper(&self) -> Option<&dyn Wrapper> {
        Some(self)
    }

    #[inline]
    fn as_wrapper_mut(&mut self) -> Option<&mut dyn Wrapper> {
        Some(self)
    }
}
