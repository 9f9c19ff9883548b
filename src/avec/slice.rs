//! Slice-based decoder and encoder implementation.

use alloc::vec::Vec;

use either::Either::Left;

use crate::{
    Error,
    sans::{
        Decoder,
        cursor::{Cursor, Writer},
        header::Flags,
        schema::{FieldSpec, Presence, Schema},
    },
};

use super::{FromFields, IntoFields, Sample};

/// Decode a characteristic value from a slice, publishing to a receiver.
///
/// Returns the value's flags, for any state a record derives from them.
/// Bytes following the last transmitted field are ignored.
///
/// This method is also re-exported as `freewheel::avec::decode_slice`.
pub fn decode(
    schema: &Schema,
    r: &[u8],
    o: &mut (impl FromFields + ?Sized),
) -> Result<Flags, Error> {
    let mut cursor = Cursor::new(r);

    let state = Decoder::new(schema);
    let size = state.size();
    let (flags, mut successor) = state.advance(cursor.slice(size)?);

    while let Left(state) = successor {
        let size = state.size();
        let (field, reading, next) = state.advance(cursor.slice(size)?);

        if let Some(reading) = reading {
            o.add_reading(field, reading);
        }

        successor = next;
    }

    Ok(flags)
}

/// Encode a characteristic value from a source of field values.
///
/// Presence bits are derived from the fields the source supplies; bits
/// without fields of their own (such as a movement direction) are taken from
/// `extra`.
///
/// This method is also re-exported as `freewheel::avec::encode_slice`.
pub fn encode(
    schema: &Schema,
    extra: Flags,
    o: &(impl IntoFields + ?Sized),
) -> Result<Vec<u8>, Error> {
    let flags = presence_flags(schema, extra, o);

    let mut w = Writer::with_capacity(schema.flags_size() + 2 * schema.fields.len());

    if let Some(width) = schema.flags {
        if !w.put(width, flags.bits() as i64) {
            Err(Error::InvalidValue { field: "flags" })?;
        }
    }

    for (index, spec) in schema.fields.iter().enumerate() {
        if !spec.presence.is_present(flags) {
            continue;
        }

        let raw = match o.field(index as u8) {
            Some(sample) => raw_value(spec, sample)?,
            // Fields sharing a gate with an available field fall back to
            // their 'unavailable' marker.
            None => spec.sentinel.ok_or_else(|| invalid(spec))?,
        };

        if !w.put(spec.width, raw) {
            Err(invalid(spec))?;
        }
    }

    Ok(w.finish())
}

/// Compute the flags announcing the fields a source supplies.
fn presence_flags(schema: &Schema, extra: Flags, o: &(impl IntoFields + ?Sized)) -> Flags {
    let mut transmitted = Flags::default();

    for (index, spec) in schema.fields.iter().enumerate() {
        if let Presence::Set(bit) | Presence::Clear(bit) = spec.presence {
            if o.field(index as u8).is_some() {
                transmitted = transmitted.with(bit, true);
            }
        }
    }

    schema
        .fields
        .iter()
        .fold(extra, |flags, spec| match spec.presence {
            Presence::Always => flags,
            Presence::Set(bit) => flags.with(bit, transmitted.contains(bit)),
            Presence::Clear(bit) => flags.with(bit, !transmitted.contains(bit)),
        })
}

/// Convert a supplied value to the raw value written for a field.
fn raw_value(spec: &FieldSpec, sample: Sample) -> Result<i64, Error> {
    let raw = match sample {
        Sample::Raw(raw) => Some(raw),
        Sample::Real(value) => spec.scale.invert(value),
        Sample::Quantity(m) if m.unit() == spec.unit => spec.scale.invert(m.value()),
        Sample::Quantity(_) => None,
    };

    match raw {
        Some(raw) if spec.sentinel != Some(raw) => Ok(raw),
        _ => Err(invalid(spec)),
    }
}

fn invalid(spec: &FieldSpec) -> Error {
    tracing::debug!(field = spec.name, "value cannot be encoded");
    Error::InvalidValue { field: spec.name }
}
