//! Building blocks shared by the fitness machine data characteristics.

use crate::{
    avec::{FromFields, IntoFields},
    sans::schema::{FieldSpec, Scale, Width},
    unit::{Measurement, Unit},
};

/// Energy expended during a session.
///
/// Each quantity may be individually unavailable, even when the machine
/// reports energy at all.
#[derive(Debug, Clone, Copy, PartialEq, Default, FromFields, IntoFields)]
pub struct Energy {
    #[field(0)]
    pub total: Option<Measurement>,
    #[field(1)]
    pub per_hour: Option<Measurement>,
    #[field(2)]
    pub per_minute: Option<Measurement>,
}

/// Session time.
#[derive(Debug, Clone, Copy, PartialEq, Default, FromFields, IntoFields)]
pub struct Time {
    #[field(0)]
    pub elapsed: Option<Measurement>,
    #[field(1)]
    pub remaining: Option<Measurement>,
}

/// Direction of movement of a cross trainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementDirection {
    #[default]
    Forward,
    Backward,
}

/// Leading speed field, left out while the 'more data' bit is set.
pub(crate) const fn instantaneous_speed() -> FieldSpec {
    FieldSpec::new("instantaneous_speed", Width::U16)
        .when_clear(0)
        .scale(Scale::HUNDREDTH)
        .unit(Unit::KilometersPerHour)
}

pub(crate) const fn average_speed(bit: u8) -> FieldSpec {
    FieldSpec::new("average_speed", Width::U16)
        .when_set(bit)
        .scale(Scale::HUNDREDTH)
        .unit(Unit::KilometersPerHour)
}

pub(crate) const fn inclination(bit: u8) -> FieldSpec {
    FieldSpec::new("inclination", Width::I16)
        .when_set(bit)
        .scale(Scale::TENTH)
        .unit(Unit::Percent)
        .sentinel_max()
}

pub(crate) const fn ramp_angle(bit: u8) -> FieldSpec {
    FieldSpec::new("ramp_angle", Width::I16)
        .when_set(bit)
        .scale(Scale::TENTH)
        .unit(Unit::Degrees)
        .sentinel_max()
}

pub(crate) const fn total_energy(bit: u8) -> FieldSpec {
    FieldSpec::new("total_energy", Width::U16)
        .when_set(bit)
        .unit(Unit::Kilocalories)
        .sentinel_max()
}

pub(crate) const fn energy_per_hour(bit: u8) -> FieldSpec {
    FieldSpec::new("energy_per_hour", Width::U16)
        .when_set(bit)
        .unit(Unit::KilocaloriesPerHour)
        .sentinel_max()
}

pub(crate) const fn energy_per_minute(bit: u8) -> FieldSpec {
    FieldSpec::new("energy_per_minute", Width::U8)
        .when_set(bit)
        .unit(Unit::KilocaloriesPerMinute)
        .sentinel_max()
}

pub(crate) const fn heart_rate(bit: u8) -> FieldSpec {
    FieldSpec::new("heart_rate", Width::U8)
        .when_set(bit)
        .unit(Unit::BeatsPerMinute)
}

pub(crate) const fn metabolic_equivalent(bit: u8) -> FieldSpec {
    FieldSpec::new("metabolic_equivalent", Width::U8)
        .when_set(bit)
        .scale(Scale::TENTH)
}

pub(crate) const fn elapsed_time(bit: u8) -> FieldSpec {
    FieldSpec::new("elapsed_time", Width::U16)
        .when_set(bit)
        .unit(Unit::Seconds)
}

pub(crate) const fn remaining_time(bit: u8) -> FieldSpec {
    FieldSpec::new("remaining_time", Width::U16)
        .when_set(bit)
        .unit(Unit::Seconds)
}
