//! Parsing of the type-level `#[field(...)]` attribute.

use proc_macro2::Span;
use syn::{Attribute, LitStr, meta::ParseNestedMeta};

use crate::FIELD_ATTRIBUTE_NAME;

/// Capabilities declared on the type, with the span of the flag that
/// declared each one.
#[derive(Default, Debug)]
pub(crate) struct CapabilityFlags {
    pub marshal: Option<Span>,
    pub stringer: Option<Span>,
    pub unmarshal: Option<Span>,
}

#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub flags: CapabilityFlags,
    pub type_path: Option<LitStr>,
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs {
            if attr.path().is_ident(FIELD_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| parsed.parse_meta(meta))?;
            }
        }
        Ok(parsed)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta<'_>) -> syn::Result<()> {
        let flag = if meta.path.is_ident("marshal") {
            &mut self.flags.marshal
        } else if meta.path.is_ident("stringer") {
            &mut self.flags.stringer
        } else if meta.path.is_ident("unmarshal") {
            &mut self.flags.unmarshal
        } else if meta.path.is_ident("type_path") {
            if self.type_path.is_some() {
                return Err(meta.error("duplicate `type_path`"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new(lit.span(), "`type_path` must not be empty"));
            }
            self.type_path = Some(lit);
            return Ok(());
        } else {
            return Err(meta.error(
                "unknown field attribute, expected one of `marshal`, `stringer`, `unmarshal`, `type_path`",
            ));
        };

        if flag.is_some() {
            return Err(meta.error("duplicate capability flag"));
        }
        *flag = Some(meta.path.get_ident().map_or_else(Span::call_site, syn::Ident::span));
        Ok(())
    }
}
