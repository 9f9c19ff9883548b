use alloc::vec::Vec;

use crate::{
    Error,
    avec::{Characteristic, FieldType, FromFields, IntoFields, Sample, decode_slice, encode_slice},
    sans::{
        field::Reading,
        header::Flags,
        schema::{FieldSpec, Schema, Width},
    },
    unit::{Measurement, Unit},
};

/// Layout of a transmit power level value.
pub const SCHEMA: Schema = Schema {
    flags: None,
    fields: &[FieldSpec::new("tx_power_level", Width::I8).unit(Unit::DecibelMilliwatts)],
};

/// Current transmit power level of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TxPowerLevel {
    /// Power level in dBm, from -100 to 20.
    pub power_level: i8,
}

impl TxPowerLevel {
    pub fn measurement(&self) -> Measurement {
        Measurement::new(f64::from(self.power_level), Unit::DecibelMilliwatts)
    }
}

impl FromFields for TxPowerLevel {
    fn add_reading(&mut self, _: u8, reading: Reading) {
        if let Some(power_level) = i8::from_reading(reading) {
            self.power_level = power_level;
        }
    }
}

impl IntoFields for TxPowerLevel {
    fn field(&self, field: u8) -> Option<Sample> {
        (field == 0).then(|| self.power_level.to_sample())
    }
}

impl Characteristic for TxPowerLevel {
    const NAME: &'static str = "Tx Power Level";
    const UUID: &'static str = "2A07";

    fn decode(r: &[u8]) -> Result<Self, Error> {
        let mut value = Self::default();
        decode_slice(&SCHEMA, r, &mut value)?;
        Ok(value)
    }

    fn encode(&self) -> Result<Vec<u8>, Error> {
        encode_slice(&SCHEMA, Flags::default(), self)
    }
}
