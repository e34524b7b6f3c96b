//! Paths used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `fc_convert` crate.
///
/// 1. For crates that depend on `fc_convert`, `::fc_convert` is returned.
/// 2. For crates that depend on `fc_core`, `::fc_core::convert` is returned.
/// 3. Otherwise `::fc_convert` is returned, which is what `fc_convert` itself
///    relies on through `extern crate self as fc_convert`.
///
/// This reads the caller's `Cargo.toml`; call it once per expansion.
pub(crate) fn fc_convert() -> syn::Path {
    fc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("fc_convert"))
}

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! { ::core::option::Option }
}

#[inline(always)]
pub(crate) fn display_() -> TokenStream {
    quote! { ::core::fmt::Display }
}
