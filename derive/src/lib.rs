use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attribute;
mod from_fields;
mod into_fields;

#[proc_macro_derive(FromFields, attributes(field))]
pub fn derive_from_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match from_fields::expand_from_fields(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}

#[proc_macro_derive(IntoFields, attributes(field))]
pub fn derive_into_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match into_fields::expand_into_fields(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
