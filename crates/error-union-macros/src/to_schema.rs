//! ToSchema derive macro for error payload structs.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput};

use crate::schema::{fields_schema, qualified_name, with_docs};

/// Expand the ToSchema derive macro
pub fn expand_to_schema(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input,
            "ToSchema can only be derived for structs\n\
             \n\
             Hint: for error enums use #[derive(ErrorUnion)]",
        ));
    };

    let shape = fields_schema(&data_struct.fields, &input)?;
    let type_name = qualified_name(&[name.to_string()]);
    let docs = with_docs(&input.attrs);

    Ok(quote! {
        impl #impl_generics ::error_union::ToSchema for #name #ty_generics #where_clause {
            fn schema() -> ::error_union::Schema {
                #shape
                    .with_name(::error_union::TypeName::new(#type_name))
                    #docs
            }
        }
    })
}
