//! Characteristic value types.
//!
//! Each type implements [`Characteristic`](crate::avec::Characteristic),
//! carrying its assigned name and UUID. Types with a flags field, or whose
//! layout is otherwise described by a [`Schema`](crate::sans::schema::Schema),
//! expose it as a `SCHEMA` constant in their module.

pub mod cross_trainer;
pub mod current_time;
pub mod fitness_machine;
pub mod https_security;
pub mod object_size;
pub mod revision_string;
pub mod step_climber;
pub mod treadmill;
pub mod tx_power_level;
pub mod uv_index;

pub use cross_trainer::CrossTrainerData;
pub use current_time::{AdjustmentReason, CurrentTime, DateTime, DayOfWeek, Month};
pub use fitness_machine::{Energy, MovementDirection, Time};
pub use https_security::HttpsSecurity;
pub use object_size::ObjectSize;
pub use revision_string::{FirmwareRevisionString, HardwareRevisionString, SoftwareRevisionString};
pub use step_climber::StepClimberData;
pub use treadmill::TreadmillData;
pub use tx_power_level::TxPowerLevel;
pub use uv_index::UvIndex;
