//! Physical units attached to decoded values.

use core::{
    fmt,
    ops::{Div, Mul},
};

/// A unit of measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Default)]
pub enum Unit {
    /// A dimensionless quantity (counts, levels, metabolic equivalents).
    #[default]
    Unitless,
    KilometersPerHour,
    KilometersPerMinute,
    Meters,
    StepsPerMinute,
    BeatsPerMinute,
    Percent,
    Degrees,
    Seconds,
    Watts,
    Newtons,
    Kilocalories,
    KilocaloriesPerHour,
    KilocaloriesPerMinute,
    DecibelMilliwatts,
}

impl Unit {
    /// The conventional symbol for this unit.
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Unitless => "",
            Unit::KilometersPerHour => "km/h",
            Unit::KilometersPerMinute => "km/min",
            Unit::Meters => "m",
            Unit::StepsPerMinute => "steps/min",
            Unit::BeatsPerMinute => "bpm",
            Unit::Percent => "%",
            Unit::Degrees => "°",
            Unit::Seconds => "s",
            Unit::Watts => "W",
            Unit::Newtons => "N",
            Unit::Kilocalories => "kcal",
            Unit::KilocaloriesPerHour => "kcal/h",
            Unit::KilocaloriesPerMinute => "kcal/min",
            Unit::DecibelMilliwatts => "dBm",
        }
    }
}

/// A value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Measurement {
    value: f64,
    unit: Unit,
}

impl Measurement {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Add two measurements of the same unit.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        (self.unit == rhs.unit).then(|| Self::new(self.value + rhs.value, self.unit))
    }

    /// Subtract two measurements of the same unit.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        (self.unit == rhs.unit).then(|| Self::new(self.value - rhs.value, self.unit))
    }
}

impl Mul<f64> for Measurement {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.unit)
    }
}

impl Div<f64> for Measurement {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.unit)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Unitless => write!(f, "{}", self.value),
            unit => write!(f, "{} {}", self.value, unit.symbol()),
        }
    }
}
