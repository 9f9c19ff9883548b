#![no_std]

//! An efficient codec for Bluetooth GATT fitness machine and sensor
//! characteristics.
//!
//! Most characteristic values are short records whose layout is decided by a
//! leading bitmask: each bit marks whether an optional field is present in the
//! bytes that follow. Freewheel describes every such record as a [`Schema`]
//! and drives one decoder (and encoder) over it, instead of hand-writing the
//! conditional chain for each characteristic.
//!
//! Most users should begin with the concrete types in the [`characteristic`]
//! module, or with [`registry::decode`] when the characteristic is only known
//! by its UUID. Custom records can be built from a schema and the derive
//! macros in the [`avec`] module. The underlying finite-state machine is
//! exposed in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable standard library support in `tracing` (default).
//!
//! [`Schema`]: sans::schema::Schema

extern crate alloc;
extern crate self as freewheel;

mod error;

pub mod avec;
pub mod characteristic;
pub mod registry;
pub mod sans;
pub mod service;
pub mod unit;

pub use error::{Error, ParseError};
