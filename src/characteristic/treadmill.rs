use alloc::vec::Vec;

use crate::{
    Error,
    avec::{Characteristic, FromFields, IntoFields, decode_slice, encode_slice},
    sans::{
        header::Flags,
        schema::{FieldSpec, Scale, Schema, Width},
    },
    unit::{Measurement, Unit},
};

use super::fitness_machine::{self as fm, Energy, Time};

/// Layout of a treadmill data value.
pub const SCHEMA: Schema = Schema {
    flags: Some(Width::U16),
    fields: &[
        fm::instantaneous_speed(),
        fm::average_speed(1),
        FieldSpec::new("total_distance", Width::U24)
            .when_set(2)
            .unit(Unit::Meters),
        fm::inclination(3),
        fm::ramp_angle(3),
        FieldSpec::new("positive_elevation_gain", Width::U16)
            .when_set(4)
            .scale(Scale::TENTH)
            .unit(Unit::Meters),
        FieldSpec::new("negative_elevation_gain", Width::U16)
            .when_set(4)
            .scale(Scale::TENTH)
            .unit(Unit::Meters),
        FieldSpec::new("instantaneous_pace", Width::U8)
            .when_set(5)
            .scale(Scale::TENTH)
            .unit(Unit::KilometersPerMinute),
        FieldSpec::new("average_pace", Width::U8)
            .when_set(6)
            .scale(Scale::TENTH)
            .unit(Unit::KilometersPerMinute),
        fm::total_energy(7),
        fm::energy_per_hour(7),
        fm::energy_per_minute(7),
        fm::heart_rate(8),
        fm::metabolic_equivalent(9),
        fm::elapsed_time(10),
        fm::remaining_time(11),
        FieldSpec::new("force_on_belt", Width::I16)
            .when_set(12)
            .unit(Unit::Newtons),
        FieldSpec::new("power_output", Width::I16)
            .when_set(12)
            .unit(Unit::Watts),
    ],
};

/// Training data sent by a treadmill.
#[derive(Debug, Clone, PartialEq, Default, FromFields, IntoFields)]
pub struct TreadmillData {
    #[field(0)]
    pub instantaneous_speed: Option<Measurement>,
    #[field(1)]
    pub average_speed: Option<Measurement>,
    #[field(2)]
    pub total_distance: Option<Measurement>,
    #[field(3)]
    pub inclination: Option<Measurement>,
    #[field(4)]
    pub ramp_angle: Option<Measurement>,
    #[field(5)]
    pub positive_elevation_gain: Option<Measurement>,
    #[field(6)]
    pub negative_elevation_gain: Option<Measurement>,
    #[field(7)]
    pub instantaneous_pace: Option<Measurement>,
    #[field(8)]
    pub average_pace: Option<Measurement>,
    #[field(9..12)]
    pub energy: Energy,
    #[field(12)]
    pub heart_rate: Option<Measurement>,
    #[field(13)]
    pub metabolic_equivalent: Option<f64>,
    #[field(14..16)]
    pub time: Time,
    #[field(16)]
    pub force_on_belt: Option<Measurement>,
    #[field(17)]
    pub power_output: Option<Measurement>,
}

impl Characteristic for TreadmillData {
    const NAME: &'static str = "Treadmill Data";
    const UUID: &'static str = "2ACD";

    fn decode(r: &[u8]) -> Result<Self, Error> {
        let mut value = Self::default();
        decode_slice(&SCHEMA, r, &mut value)?;
        Ok(value)
    }

    fn encode(&self) -> Result<Vec<u8>, Error> {
        encode_slice(&SCHEMA, Flags::default(), self)
    }
}
