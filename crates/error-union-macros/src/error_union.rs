//! ErrorUnion derive macro for generating ErrorVariants implementations.
//!
//! ```ignore
//! #[derive(ErrorUnion)]
//! enum ApiError {
//!     /// Unable to find user
//!     #[status(404)]
//!     UserNotFound { name: String },
//!     #[status(Forbidden)]
//!     AccessDenied,
//!     // Status inferred from variant name
//!     InvalidEmail { email: String },
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, parse::Parse};

use crate::schema::{fields_schema, qualified_name, with_docs};

/// Argument of the #[status(...)] attribute on variants
enum StatusSpec {
    /// Named error code: NotFound, Forbidden, etc.
    Named(Ident),
    /// Numeric HTTP status: 404, 500, etc.
    Numeric(u16),
}

impl Parse for StatusSpec {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let expr: syn::Expr = input.parse()?;
        match &expr {
            syn::Expr::Path(path) if path.path.get_ident().is_some() => {
                let ident = path.path.get_ident().cloned().ok_or_else(|| {
                    syn::Error::new_spanned(&expr, "expected error code name")
                })?;
                Ok(StatusSpec::Named(ident))
            }
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Int(lit),
                ..
            }) => {
                let value: u16 = lit.base10_parse()?;
                if !(100..=999).contains(&value) {
                    return Err(syn::Error::new_spanned(
                        lit,
                        "HTTP status must be between 100 and 999",
                    ));
                }
                Ok(StatusSpec::Numeric(value))
            }
            _ => Err(syn::Error::new_spanned(
                &expr,
                "expected error code name or HTTP status\n\
                 \n\
                 Valid names: InvalidInput, Unauthenticated, Forbidden, NotFound, Conflict,\n\
                 FailedPrecondition, RateLimited, Internal, NotImplemented, Unavailable\n\
                 Or use HTTP status: 400, 404, 500, etc.\n\
                 \n\
                 Example: #[status(NotFound)] or #[status(404)]",
            )),
        }
    }
}

/// Expand the ErrorUnion derive macro
pub fn expand_error_union(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input,
            "ErrorUnion can only be derived for enums\n\
             \n\
             Hint: Define your errors as an enum:\n\
             \n\
             #[derive(Debug, ErrorUnion)]\n\
             enum ApiError {{\n\
                 #[status(404)]\n\
                 UserNotFound {{ name: String }},\n\
             }}",
        ));
    };

    if data_enum.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input,
            "ErrorUnion needs at least one variant",
        ));
    }

    let mut id_arms = Vec::new();
    let mut declared = Vec::new();
    let mut schemas = Vec::new();

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;
        let variant_name_str = variant_name.to_string();
        let full_name = qualified_name(&[name_str.clone(), variant_name_str.clone()]);
        let variant_id = quote! { ::error_union::VariantId::new(#full_name) };

        let mut status_attrs = variant
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("status"));
        let spec = status_attrs
            .next()
            .map(|attr| attr.parse_args::<StatusSpec>())
            .transpose()?;
        if let Some(extra) = status_attrs.next() {
            return Err(syn::Error::new_spanned(
                extra,
                format!("duplicate #[status] attribute on `{variant_name}`, keep only one"),
            ));
        }

        let status = match spec {
            Some(StatusSpec::Named(ident)) => {
                quote! { ::error_union::ErrorCode::#ident.status() }
            }
            Some(StatusSpec::Numeric(code)) => {
                // range checked above, the fallback is never taken
                quote! {
                    ::error_union::StatusCode::from_u16(#code)
                        .unwrap_or(::error_union::StatusCode::INTERNAL_SERVER_ERROR)
                }
            }
            None => {
                quote! { ::error_union::ErrorCode::infer_from_name(#variant_name_str).status() }
            }
        };

        let pattern = match &variant.fields {
            Fields::Unit => quote! { Self::#variant_name },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
            Fields::Named(_) => quote! { Self::#variant_name { .. } },
        };

        let shape = fields_schema(&variant.fields, variant)?;
        let docs = with_docs(&variant.attrs);

        id_arms.push(quote! { #pattern => #variant_id });
        declared.push(quote! { (#variant_id, #status) });
        schemas.push(quote! {
            #shape
                .with_name(::error_union::TypeName::new(#full_name))
                #docs
        });
    }

    let enum_name = qualified_name(&[name_str]);
    let enum_docs = with_docs(&input.attrs);

    Ok(quote! {
        impl #impl_generics ::error_union::ErrorVariants for #name #ty_generics #where_clause {
            fn variant_id(&self) -> ::error_union::VariantId {
                match self {
                    #(#id_arms,)*
                }
            }

            fn declared_variants() -> ::std::vec::Vec<(::error_union::VariantId, ::error_union::StatusCode)> {
                ::std::vec![#(#declared),*]
            }

            fn error_schema() -> ::error_union::Schema {
                ::error_union::Schema::coproduct(::std::vec![#(#schemas),*])
                    .with_name(::error_union::TypeName::new(#enum_name))
                    #enum_docs
            }
        }
    })
}
