use std::collections::HashSet;

use proc_macro::Span;
use syn::{
    Data, DeriveInput, Error, Field, Fields, GenericArgument, Ident, LitInt, PathArguments,
    Result, Token, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

/// Collect the annotated fields of a struct, checking that no two of them
/// claim the same index.
pub(crate) fn parse_fields(input: &DeriveInput, derive: &str) -> Result<Vec<FieldMetadata>> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            format!("`{derive}` may only be derived on structs."),
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            format!("`{derive}` may only be derived on structs with named fields."),
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let mut claimed = HashSet::new();

    for field in &fields {
        for index in field.index.indices()? {
            if !claimed.insert(index) {
                Err(Error::new(field.span.into(), "Field indices must be unique."))?;
            }
        }
    }

    Ok(fields)
}

#[derive(Debug)]
pub(crate) struct FieldMetadata {
    pub(crate) name: Ident,
    pub(crate) index: FieldIndex,
    span: Span,
}

#[derive(Debug)]
pub(crate) enum FieldIndex {
    /// A single field, stored in an `Option<T>`.
    Single(LitInt),
    /// A run of fields, handed to a nested struct.
    Nested(LitInt, LitInt),
}

impl FieldIndex {
    fn indices(&self) -> Result<Vec<u8>> {
        match self {
            FieldIndex::Single(number) => Ok(vec![number.base10_parse()?]),
            FieldIndex::Nested(start, end) => {
                let (s, e): (u8, u8) = (start.base10_parse()?, end.base10_parse()?);

                if e <= s {
                    Err(Error::new(end.span(), "Field range must not be empty."))?
                }

                Ok((s..e).collect())
            }
        }
    }
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(None);
        };

        let span = attr.span().unwrap();

        let FieldAttribute { index } = attr.meta.require_list()?.parse_args()?;

        if let FieldIndex::Single(_) = index {
            require_option(&field.ty)?;
        }

        Ok(Some(Self { name, index, span }))
    }
}

/// Check that a type is written as `Option<T>`.
fn require_option(ty: &Type) -> Result<()> {
    let Type::Path(path) = ty else {
        Err(Error::new_spanned(ty, "Field must have a type annotation."))?
    };

    let Some(segment) = path.path.segments.last() else {
        Err(Error::new_spanned(
            &path.path.segments,
            "Field must have a type annotation.",
        ))?
    };

    if segment.ident != "Option" {
        Err(Error::new_spanned(
            &segment.ident,
            "Field with a single index must have type `Option<T>`.",
        ))?
    }

    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        Err(Error::new_spanned(
            &segment.arguments,
            "Field of type `Option<T>` must have a generic parameter.",
        ))?
    };

    let Some(GenericArgument::Type(_)) = arguments.args.first() else {
        Err(Error::new_spanned(
            &arguments.args,
            "Generic argument of a field of type `Option<T>` must be a type.",
        ))?
    };

    Ok(())
}

#[derive(Debug)]
struct FieldAttribute {
    index: FieldIndex,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let start = input.parse::<LitInt>()?;

        let index = if input.peek(Token![..]) {
            input.parse::<Token![..]>()?;
            FieldIndex::Nested(start, input.parse::<LitInt>()?)
        } else {
            FieldIndex::Single(start)
        };

        Ok(Self { index })
    }
}
