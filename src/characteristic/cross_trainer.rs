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

use super::fitness_machine::{self as fm, Energy, MovementDirection, Time};

/// Flag bit marking backward movement.
const BACKWARD_DIRECTION: u8 = 15;

/// Layout of a cross trainer data value.
pub const SCHEMA: Schema = Schema {
    flags: Some(Width::U24),
    fields: &[
        fm::instantaneous_speed(),
        fm::average_speed(1),
        FieldSpec::new("total_distance", Width::U16)
            .when_set(2)
            .unit(Unit::Meters),
        FieldSpec::new("steps_per_minute", Width::U16)
            .when_set(3)
            .unit(Unit::StepsPerMinute)
            .sentinel_max(),
        FieldSpec::new("average_step_rate", Width::U16)
            .when_set(3)
            .unit(Unit::StepsPerMinute)
            .sentinel_max(),
        FieldSpec::new("stride_count", Width::U16)
            .when_set(4)
            .scale(Scale::TENTH),
        FieldSpec::new("positive_elevation_gain", Width::U16)
            .when_set(5)
            .unit(Unit::Meters),
        FieldSpec::new("negative_elevation_gain", Width::U16)
            .when_set(5)
            .unit(Unit::Meters),
        fm::inclination(6),
        fm::ramp_angle(6),
        FieldSpec::new("resistance_level", Width::I16)
            .when_set(7)
            .scale(Scale::TENTH),
        FieldSpec::new("instantaneous_power", Width::I16)
            .when_set(8)
            .unit(Unit::Watts),
        FieldSpec::new("average_power", Width::I16)
            .when_set(9)
            .unit(Unit::Watts),
        fm::total_energy(10),
        fm::energy_per_hour(10),
        fm::energy_per_minute(10),
        fm::heart_rate(11),
        fm::metabolic_equivalent(12),
        fm::elapsed_time(13),
        fm::remaining_time(14),
    ],
};

/// Training data sent by a cross trainer.
#[derive(Debug, Clone, PartialEq, Default, FromFields, IntoFields)]
pub struct CrossTrainerData {
    #[field(0)]
    pub instantaneous_speed: Option<Measurement>,
    #[field(1)]
    pub average_speed: Option<Measurement>,
    #[field(2)]
    pub total_distance: Option<Measurement>,
    #[field(3)]
    pub steps_per_minute: Option<Measurement>,
    #[field(4)]
    pub average_step_rate: Option<Measurement>,
    #[field(5)]
    pub stride_count: Option<f64>,
    #[field(6)]
    pub positive_elevation_gain: Option<Measurement>,
    #[field(7)]
    pub negative_elevation_gain: Option<Measurement>,
    #[field(8)]
    pub inclination: Option<Measurement>,
    #[field(9)]
    pub ramp_angle: Option<Measurement>,
    #[field(10)]
    pub resistance_level: Option<f64>,
    #[field(11)]
    pub instantaneous_power: Option<Measurement>,
    #[field(12)]
    pub average_power: Option<Measurement>,
    #[field(13..16)]
    pub energy: Energy,
    #[field(16)]
    pub heart_rate: Option<Measurement>,
    #[field(17)]
    pub metabolic_equivalent: Option<f64>,
    #[field(18..20)]
    pub time: Time,
    pub movement_direction: MovementDirection,
}

impl Characteristic for CrossTrainerData {
    const NAME: &'static str = "Cross Trainer Data";
    const UUID: &'static str = "2ACE";

    fn decode(r: &[u8]) -> Result<Self, Error> {
        let mut value = Self::default();
        let flags = decode_slice(&SCHEMA, r, &mut value)?;

        value.movement_direction = if flags.contains(BACKWARD_DIRECTION) {
            MovementDirection::Backward
        } else {
            MovementDirection::Forward
        };

        Ok(value)
    }

    fn encode(&self) -> Result<Vec<u8>, Error> {
        let extra = Flags::default().with(
            BACKWARD_DIRECTION,
            self.movement_direction == MovementDirection::Backward,
        );

        encode_slice(&SCHEMA, extra, self)
    }
}
