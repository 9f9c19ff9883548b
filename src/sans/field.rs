//! States processing the fields of a characteristic value.

use either::Either::{self, Left, Right};

use crate::unit::{Measurement, Unit};

use super::{
    header::Flags,
    schema::{FieldSpec, Scale, Schema},
};

/// A decoded field value: the raw integer found on the wire, along with the
/// resolution and unit needed to interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    raw: i64,
    scale: Scale,
    unit: Unit,
}

impl Reading {
    pub const fn new(raw: i64, scale: Scale, unit: Unit) -> Self {
        Self { raw, scale, unit }
    }

    pub const fn raw(&self) -> i64 {
        self.raw
    }

    /// The real-world value, with the field's resolution applied.
    pub fn value(&self) -> f64 {
        self.scale.apply(self.raw)
    }

    pub const fn unit(&self) -> Unit {
        self.unit
    }

    pub fn measurement(&self) -> Measurement {
        Measurement::new(self.value(), self.unit)
    }
}

/// State token to decode a transmitted field.
#[derive(Debug)]
pub struct Field<'s> {
    schema: &'s Schema,
    flags: Flags,
    index: usize,
}

impl<'s> Field<'s> {
    /// Successor state for the first transmitted field at or after an index.
    fn next(schema: &'s Schema, flags: Flags, from: usize) -> Either<Self, End> {
        let index = schema
            .fields
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, spec)| spec.presence.is_present(flags))
            .map(|(index, _)| index);

        match index {
            Some(index) => Left(Self {
                schema,
                flags,
                index,
            }),
            None => Right(End(())),
        }
    }

    pub(super) fn first(schema: &'s Schema, flags: Flags) -> Either<Self, End> {
        Self::next(schema, flags, 0)
    }

    /// Description of the field to decode.
    pub fn spec(&self) -> &'s FieldSpec {
        &self.schema.fields[self.index]
    }

    /// Number of bytes needed to advance.
    pub fn size(&self) -> usize {
        self.spec().width.size()
    }

    /// Transition to another state by decoding the field.
    ///
    /// Returns the field index, the reading if the field did not contain its
    /// 'unavailable' marker value, and a successor state.
    ///
    /// `r` must hold exactly [`size`](Self::size) bytes.
    pub fn advance(self, r: &[u8]) -> (u8, Option<Reading>, Either<Self, End>) {
        debug_assert_eq!(r.len(), self.size(), "field needs exactly `size` bytes");

        let spec = self.spec();
        let raw = spec.width.from_le(r);

        let reading = if spec.sentinel == Some(raw) {
            tracing::trace!(field = spec.name, raw, "field marked unavailable");
            None
        } else {
            Some(Reading::new(raw, spec.scale, spec.unit))
        };

        let successor = Self::next(self.schema, self.flags, self.index + 1);

        (self.index as u8, reading, successor)
    }
}

/// State token marking the end of a characteristic value.
///
/// Any bytes remaining after this state are not described by the schema.
#[derive(Debug)]
pub struct End(());
