//! Schema expressions shared by the derives.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Fields, Lit, Meta};

/// Extract doc comments from attributes
pub(crate) fn extract_docs(attrs: &[syn::Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if attr.path().is_ident("doc")
                && let Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(s), ..
                }) = &meta.value
            {
                return Some(s.value().trim().to_string());
            }
            None
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n"))
    }
}

/// `concat!(module_path!(), "::", segments...)` as a `&'static str` expression.
pub(crate) fn qualified_name(segments: &[String]) -> TokenStream {
    quote! {
        ::core::concat!(::core::module_path!() #(, "::", #segments)*)
    }
}

/// Schema expression for a set of fields, without name or description.
///
/// Named and unit fields give a record; a single unnamed field reuses the
/// payload's own schema.
pub(crate) fn fields_schema<T: quote::ToTokens>(
    fields: &Fields,
    owner: &T,
) -> syn::Result<TokenStream> {
    match fields {
        Fields::Unit => Ok(quote! { ::error_union::Schema::product(::std::vec::Vec::new()) }),
        Fields::Named(named) => {
            let entries = named.named.iter().map(|field| {
                let ty = &field.ty;
                let name = field
                    .ident
                    .as_ref()
                    .map(|ident| ident.to_string().trim_start_matches("r#").to_string())
                    .unwrap_or_default();
                quote! {
                    ::error_union::Field::new(#name, <#ty as ::error_union::ToSchema>::schema())
                }
            });
            Ok(quote! { ::error_union::Schema::product(::std::vec![#(#entries),*]) })
        }
        Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => {
            let ty = &unnamed.unnamed[0].ty;
            Ok(quote! { <#ty as ::error_union::ToSchema>::schema() })
        }
        Fields::Unnamed(_) => Err(syn::Error::new_spanned(
            owner,
            "tuple variants with more than one field have no record schema\n\
             \n\
             Hint: name the fields:\n\
             \n\
             Locked { user: String, until: u64 }",
        )),
    }
}

/// `.with_description(...)` when docs are present.
pub(crate) fn with_docs(attrs: &[syn::Attribute]) -> TokenStream {
    match extract_docs(attrs) {
        Some(docs) => quote! { .with_description(#docs) },
        None => quote! {},
    }
}
