use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

use crate::attribute::{FieldIndex, FieldMetadata, parse_fields};

pub(crate) fn expand_from_fields(input: &DeriveInput) -> Result<TokenStream> {
    let fields = parse_fields(input, "FromFields")?;

    let cases = fields.iter().map(|FieldMetadata { name, index, .. }| match index {
        FieldIndex::Single(number) => quote! {
            #number => {
                self.#name = ::freewheel::avec::FieldType::from_reading(reading);
            }
        },
        FieldIndex::Nested(start, end) => quote! {
            #start..#end => {
                ::freewheel::avec::FromFields::add_reading(&mut self.#name, field - #start, reading);
            }
        },
    });

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::freewheel::avec::FromFields for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn add_reading(&mut self, field: u8, reading: ::freewheel::sans::field::Reading) {
                match field {
                    #(#cases)*
                    _ => {}
                };
            }
        }
    };

    Ok(expanded.into())
}
