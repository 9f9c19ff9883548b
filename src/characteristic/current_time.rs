use alloc::vec::Vec;

use tartan_bitfield::bitfield;
use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::{Error, avec::Characteristic, sans::cursor::Cursor};

macro_rules! enumerant {
    ($(#[$attr:meta])* $t:ident, $field:literal, { $($variant:ident = $n:literal,)* }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(u8)]
        pub enum $t {
            #[default]
            Unknown = 0,
            $($variant = $n,)*
        }

        impl TryFrom<u8> for $t {
            type Error = Error;

            fn try_from(x: u8) -> Result<Self, Error> {
                match x {
                    0 => Ok(Self::Unknown),
                    $($n => Ok(Self::$variant),)*
                    _ => {
                        tracing::debug!(field = $field, value = x, "unrecognized enumerant");
                        Err(Error::InvalidValue { field: $field })
                    }
                }
            }
        }
    };
}

enumerant! {
    /// Month of the year.
    Month, "month", {
        January = 1,
        February = 2,
        March = 3,
        April = 4,
        May = 5,
        June = 6,
        July = 7,
        August = 8,
        September = 9,
        October = 10,
        November = 11,
        December = 12,
    }
}

enumerant! {
    /// Day of the week, starting on Monday.
    DayOfWeek, "day_of_week", {
        Monday = 1,
        Tuesday = 2,
        Wednesday = 3,
        Thursday = 4,
        Friday = 5,
        Saturday = 6,
        Sunday = 7,
    }
}

/// A calendar date and wall-clock time. Zero marks an unknown year or day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateTime {
    pub year: u16,
    pub month: Month,
    pub day: u8,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// Why the time was last adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AdjustmentReason {
    pub manual_time_update: bool,
    pub external_reference_time_update: bool,
    pub time_zone_change: bool,
    pub daylight_savings_change: bool,
}

bitfield! {
    struct ReasonFlags(u8) {
        [0] manual_time_update,
        [1] external_reference_time_update,
        [2] time_zone_change,
        [3] daylight_savings_change,
        [4..8] reserved: u8,
    }
}

impl TryFrom<u8> for AdjustmentReason {
    type Error = Error;

    /// Reserved bits must be clear.
    fn try_from(x: u8) -> Result<Self, Error> {
        let flags = ReasonFlags(x);

        if flags.reserved() != 0 {
            tracing::debug!(value = x, "reserved adjustment reason");
            Err(Error::InvalidValue {
                field: "adjustment_reason",
            })?;
        }

        Ok(Self {
            manual_time_update: flags.manual_time_update(),
            external_reference_time_update: flags.external_reference_time_update(),
            time_zone_change: flags.time_zone_change(),
            daylight_savings_change: flags.daylight_savings_change(),
        })
    }
}

impl From<AdjustmentReason> for u8 {
    fn from(reason: AdjustmentReason) -> Self {
        ReasonFlags(0)
            .with_manual_time_update(reason.manual_time_update)
            .with_external_reference_time_update(reason.external_reference_time_update)
            .with_time_zone_change(reason.time_zone_change)
            .with_daylight_savings_change(reason.daylight_savings_change)
            .0
    }
}

/// Current date and time of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CurrentTime {
    pub current_time: DateTime,
    pub day_of_week: DayOfWeek,
    /// Fractions of a second, in units of 1/256 s.
    pub fractional_seconds: u8,
    pub adjustment_reason: AdjustmentReason,
}

#[repr(C, packed)]
#[derive(FromBytes, IntoBytes, Immutable)]
struct CurrentTimeValue {
    year: [u8; 2],
    month: u8,
    day: u8,
    hours: u8,
    minutes: u8,
    seconds: u8,
    day_of_week: u8,
    fractions: u8,
    adjustment_reason: u8,
}

impl Characteristic for CurrentTime {
    const NAME: &'static str = "Current Time";
    const UUID: &'static str = "2A2B";

    fn decode(r: &[u8]) -> Result<Self, Error> {
        let CurrentTimeValue {
            year,
            month,
            day,
            hours,
            minutes,
            seconds,
            day_of_week,
            fractions,
            adjustment_reason,
        } = zerocopy::transmute!(Cursor::new(r).take::<10>()?);

        Ok(Self {
            current_time: DateTime {
                year: u16::from_le_bytes(year),
                month: month.try_into()?,
                day,
                hours,
                minutes,
                seconds,
            },
            day_of_week: day_of_week.try_into()?,
            fractional_seconds: fractions,
            adjustment_reason: adjustment_reason.try_into()?,
        })
    }

    fn encode(&self) -> Result<Vec<u8>, Error> {
        let DateTime {
            year,
            month,
            day,
            hours,
            minutes,
            seconds,
        } = self.current_time;

        let r: [u8; 10] = zerocopy::transmute!(CurrentTimeValue {
            year: year.to_le_bytes(),
            month: month as u8,
            day,
            hours,
            minutes,
            seconds,
            day_of_week: self.day_of_week as u8,
            fractions: self.fractional_seconds,
            adjustment_reason: self.adjustment_reason.into(),
        });

        Ok(r.to_vec())
    }
}
