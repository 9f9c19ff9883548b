use alloc::vec::Vec;

use crate::{
    Error,
    avec::{Characteristic, FromFields, IntoFields, decode_slice, encode_slice},
    sans::{
        header::Flags,
        schema::{FieldSpec, Schema, Width},
    },
    unit::{Measurement, Unit},
};

use super::fitness_machine::{self as fm, Energy, Time};

/// Layout of a step climber data value.
pub const SCHEMA: Schema = Schema {
    flags: Some(Width::U16),
    fields: &[
        FieldSpec::new("floors", Width::U16).when_clear(0),
        FieldSpec::new("step_count", Width::U16).when_clear(0),
        FieldSpec::new("steps_per_minute", Width::U16)
            .when_set(1)
            .unit(Unit::StepsPerMinute)
            .sentinel_max(),
        FieldSpec::new("average_step_rate", Width::U16)
            .when_set(2)
            .unit(Unit::StepsPerMinute)
            .sentinel_max(),
        FieldSpec::new("positive_elevation_gain", Width::U16)
            .when_set(3)
            .unit(Unit::Meters),
        fm::total_energy(4),
        fm::energy_per_hour(4),
        fm::energy_per_minute(4),
        fm::heart_rate(5),
        fm::metabolic_equivalent(6),
        fm::elapsed_time(7),
        fm::remaining_time(8),
    ],
};

/// Training data sent by a step climber.
#[derive(Debug, Clone, PartialEq, Default, FromFields, IntoFields)]
pub struct StepClimberData {
    /// Floors climbed.
    #[field(0)]
    pub floors: Option<u16>,
    #[field(1)]
    pub step_count: Option<u16>,
    #[field(2)]
    pub steps_per_minute: Option<Measurement>,
    #[field(3)]
    pub average_step_rate: Option<Measurement>,
    #[field(4)]
    pub positive_elevation_gain: Option<Measurement>,
    #[field(5..8)]
    pub energy: Energy,
    #[field(8)]
    pub heart_rate: Option<Measurement>,
    #[field(9)]
    pub metabolic_equivalent: Option<f64>,
    #[field(10..12)]
    pub time: Time,
}

impl Characteristic for StepClimberData {
    const NAME: &'static str = "Step Climber Data";
    const UUID: &'static str = "2ACF";

    fn decode(r: &[u8]) -> Result<Self, Error> {
        let mut value = Self::default();
        decode_slice(&SCHEMA, r, &mut value)?;
        Ok(value)
    }

    fn encode(&self) -> Result<Vec<u8>, Error> {
        encode_slice(&SCHEMA, Flags::default(), self)
    }
}
