use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{Data, DeriveInput, GenericParam, parse_quote};

use crate::attributes::TypeAttributes;
use crate::path;

pub(crate) fn impl_field(mut ast: DeriveInput) -> syn::Result<TokenStream> {
    if let Data::Union(data) = &ast.data {
        return Err(syn::Error::new(
            data.union_token.span,
            "Field cannot be derived for unions",
        ));
    }

    let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

    let mut static_bounds: Vec<syn::WherePredicate> = Vec::new();
    for param in &ast.generics.params {
        match param {
            GenericParam::Lifetime(def) => {
                return Err(syn::Error::new_spanned(
                    def,
                    "Field cannot be derived for types with lifetime parameters",
                ));
            }
            GenericParam::Type(ty) => {
                let ident = &ty.ident;
                static_bounds.push(parse_quote!(#ident: 'static));
            }
            GenericParam::Const(_) => {}
        }
    }
    ast.generics
        .make_where_clause()
        .predicates
        .extend(static_bounds);

    let fc_convert = path::fc_convert();
    let option_ = path::option_();

    let type_path = attrs.type_path.as_ref().map(|lit| {
        quote! {
            #[inline]
            fn type_path(&self) -> &'static str {
                #lit
            }
        }
    });

    let as_marshaller = attrs.flags.marshal.map(|span| {
        quote_spanned! { span =>
            #[inline]
            fn as_marshaller(&self) -> #option_<&dyn #fc_convert::TypeMarshaller> {
                #option_::Some(self)
            }
        }
    });

    let as_stringer = attrs.flags.stringer.map(|span| {
        let display_ = path::display_();
        quote_spanned! { span =>
            #[inline]
            fn as_stringer(&self) -> #option_<&dyn #display_> {
                #option_::Some(self)
            }
        }
    });

    let as_unmarshaller = attrs.flags.unmarshal.map(|span| {
        quote_spanned! { span =>
            #[inline]
            fn as_unmarshaller(&mut self) -> #option_<&mut dyn #fc_convert::TypeUnmarshaller> {
                #option_::Some(self)
            }
        }
    });

    let ident = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #fc_convert::Field for #ident #ty_generics #where_clause {
            #[inline]
            fn field_ref(&self) -> #fc_convert::FieldRef<'_> {
                #fc_convert::FieldRef::Other(self)
            }

            #[inline]
            fn field_mut(&mut self) -> #fc_convert::FieldMut<'_> {
                #fc_convert::FieldMut::Other(self)
            }

            #type_path
            #as_marshaller
            #as_stringer
            #as_unmarshaller
        }
    })
}
