use alloc::vec::Vec;

use crate::{
    Error,
    avec::{Characteristic, FieldType, FromFields, IntoFields, Sample, decode_slice, encode_slice},
    sans::{
        field::Reading,
        header::Flags,
        schema::{FieldSpec, Schema, Width},
    },
};

/// Layout of a UV index value.
pub const SCHEMA: Schema = Schema {
    flags: None,
    fields: &[FieldSpec::new("uv_index", Width::U8)],
};

/// Ultraviolet index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UvIndex {
    pub uv_index: u8,
}

impl FromFields for UvIndex {
    fn add_reading(&mut self, _: u8, reading: Reading) {
        if let Some(uv_index) = u8::from_reading(reading) {
            self.uv_index = uv_index;
        }
    }
}

impl IntoFields for UvIndex {
    fn field(&self, field: u8) -> Option<Sample> {
        (field == 0).then(|| self.uv_index.to_sample())
    }
}

impl Characteristic for UvIndex {
    const NAME: &'static str = "UV Index";
    const UUID: &'static str = "2A76";

    fn decode(r: &[u8]) -> Result<Self, Error> {
        let mut value = Self::default();
        decode_slice(&SCHEMA, r, &mut value)?;
        Ok(value)
    }

    fn encode(&self) -> Result<Vec<u8>, Error> {
        encode_slice(&SCHEMA, Flags::default(), self)
    }
}
