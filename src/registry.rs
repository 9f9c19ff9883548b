//! Lookup of characteristic types by UUID.

use alloc::vec::Vec;

use crate::{
    Error,
    avec::Characteristic,
    characteristic::{
        CrossTrainerData, CurrentTime, FirmwareRevisionString, HardwareRevisionString, HttpsSecurity,
        ObjectSize, SoftwareRevisionString, StepClimberData, TreadmillData, TxPowerLevel, UvIndex,
        cross_trainer, step_climber, treadmill, tx_power_level, uv_index,
    },
    sans::schema::Schema,
};

macro_rules! registry {
    ($($variant:ident($t:ty)),* $(,)?) => {
        /// A value of any registered characteristic.
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyCharacteristic {
            $($variant($t),)*
        }

        impl AnyCharacteristic {
            /// Display name of the value's characteristic.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$t as Characteristic>::NAME,)*
                }
            }

            /// UUID of the value's characteristic.
            pub fn uuid(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$t as Characteristic>::UUID,)*
                }
            }

            pub fn encode(&self) -> Result<Vec<u8>, Error> {
                match self {
                    $(Self::$variant(v) => v.encode(),)*
                }
            }
        }

        $(
            impl From<$t> for AnyCharacteristic {
                fn from(v: $t) -> Self {
                    Self::$variant(v)
                }
            }
        )*

        /// Decode a value of the characteristic with the given UUID.
        ///
        /// Returns `None` if no characteristic is registered for the UUID.
        /// UUIDs are compared case-insensitively.
        pub fn decode(uuid: &str, r: &[u8]) -> Result<Option<AnyCharacteristic>, Error> {
            $(
                if uuid.eq_ignore_ascii_case(<$t as Characteristic>::UUID) {
                    return <$t as Characteristic>::decode(r).map(|v| Some(AnyCharacteristic::$variant(v)));
                }
            )*

            tracing::debug!(uuid, "no characteristic registered");

            Ok(None)
        }

        /// Display name of the characteristic with the given UUID.
        pub fn name(uuid: &str) -> Option<&'static str> {
            [$((<$t as Characteristic>::UUID, <$t as Characteristic>::NAME),)*]
                .into_iter()
                .find(|(u, _)| uuid.eq_ignore_ascii_case(u))
                .map(|(_, name)| name)
        }
    };
}

registry! {
    CrossTrainerData(CrossTrainerData),
    StepClimberData(StepClimberData),
    TreadmillData(TreadmillData),
    HttpsSecurity(HttpsSecurity),
    CurrentTime(CurrentTime),
    ObjectSize(ObjectSize),
    SoftwareRevisionString(SoftwareRevisionString),
    FirmwareRevisionString(FirmwareRevisionString),
    HardwareRevisionString(HardwareRevisionString),
    UvIndex(UvIndex),
    TxPowerLevel(TxPowerLevel),
}

/// Schema of the characteristic with the given UUID, if its layout is
/// described by one.
pub fn schema(uuid: &str) -> Option<&'static Schema> {
    let schemas: [(&str, &'static Schema); 5] = [
        (CrossTrainerData::UUID, &cross_trainer::SCHEMA),
        (StepClimberData::UUID, &step_climber::SCHEMA),
        (TreadmillData::UUID, &treadmill::SCHEMA),
        (UvIndex::UUID, &uv_index::SCHEMA),
        (TxPowerLevel::UUID, &tx_power_level::SCHEMA),
    ];

    schemas
        .into_iter()
        .find(|(u, _)| uuid.eq_ignore_ascii_case(u))
        .map(|(_, schema)| schema)
}
