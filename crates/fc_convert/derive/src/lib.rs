//! See following macros:
//!
//! - [`Field`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static FIELD_ATTRIBUTE_NAME: &str = "field";

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Field Derivation
///
/// `#[derive(Field)]` implements `fc_convert::Field` for a struct or enum.
/// The type is treated as kind `Other`: the engine never looks inside it and
/// converts it only through the capabilities it declares.
///
/// ## Capabilities
///
/// Capabilities are declared with flags in a type-level `#[field(...)]`
/// attribute. Each flag requires the matching trait to be implemented.
///
/// - `marshal`: `TypeMarshaller`, used to render the value as text.
/// - `stringer`: `core::fmt::Display`, used to render the value when
///   `marshal` is not declared.
/// - `unmarshal`: `TypeUnmarshaller`, used to parse text into the value.
///
/// ```rust, ignore
/// #[derive(Field, Default)]
/// #[field(marshal, unmarshal)]
/// struct Money { cents: i64 }
///
/// impl TypeMarshaller for Money { /* ... */ }
/// impl TypeUnmarshaller for Money { /* ... */ }
/// ```
///
/// A type without any flag is accepted but can be converted neither way.
///
/// ## Custom Type Path
///
/// Error messages name the type by `core::any::type_name`. Override it with:
///
/// ```rust, ignore
/// #[derive(Field)]
/// #[field(stringer, type_path = "billing::Money")]
/// struct Money { cents: i64 }
/// ```
///
/// ## Generics
///
/// Every type parameter gets a `'static` bound. Lifetime parameters are not
/// supported.
#[proc_macro_derive(Field, attributes(field))]
pub fn derive_field(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::impl_field(ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
