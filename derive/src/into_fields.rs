use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

use crate::attribute::{FieldIndex, FieldMetadata, parse_fields};

pub(crate) fn expand_into_fields(input: &DeriveInput) -> Result<TokenStream> {
    let fields = parse_fields(input, "IntoFields")?;

    let cases = fields.iter().map(|FieldMetadata { name, index, .. }| match index {
        FieldIndex::Single(number) => quote! {
            #number => self.#name.as_ref().map(::freewheel::avec::FieldType::to_sample),
        },
        FieldIndex::Nested(start, end) => quote! {
            #start..#end => ::freewheel::avec::IntoFields::field(&self.#name, field - #start),
        },
    });

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::freewheel::avec::IntoFields for #ident #ty_generics #where_clause {
            fn field(&self, field: u8) -> ::core::option::Option<::freewheel::avec::Sample> {
                match field {
                    #(#cases)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    Ok(expanded.into())
}
