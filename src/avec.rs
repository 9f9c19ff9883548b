//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode characteristic values from slices,
//! publishing to the [`FromFields`] trait, and encode them back from the
//! [`IntoFields`] trait.
//!
//! In most cases, these traits can be derived. See the
//! [`FromFields`](macro@FromFields) and [`IntoFields`](macro@IntoFields)
//! macros for details.

use alloc::vec::Vec;

use crate::{
    Error,
    sans::field::Reading,
    unit::Measurement,
};

pub mod slice;

pub use slice::{decode as decode_slice, encode as encode_slice};

/// A characteristic: a record type with a fixed identity and a byte layout.
pub trait Characteristic: Sized {
    /// Display name.
    const NAME: &'static str;
    /// Assigned 16-bit UUID, as four hexadecimal digits.
    const UUID: &'static str;

    /// Decode a characteristic value.
    fn decode(r: &[u8]) -> Result<Self, Error>;

    /// Encode a characteristic value.
    ///
    /// The default implementation returns [`Error::Unsupported`].
    fn encode(&self) -> Result<Vec<u8>, Error> {
        Err(Error::Unsupported)
    }
}

/// Derive [`FromFields`] for a struct representing a characteristic value.
///
/// # Examples
///
/// To receive a field, add the `field(N)` attribute to an `Option<T>` struct
/// field, where `N` is the field's index in the schema and `T` implements
/// [`FieldType`]. Fields the value leaves out, or that hold their
/// 'unavailable' marker, stay `None`.
///
/// ```
/// #[derive(Debug, Default, FromFields)]
/// struct StepClimberData {
///     #[field(0)]
///     floors: Option<u16>,
///     #[field(2)]
///     steps_per_minute: Option<Measurement>,
/// }
/// ```
///
/// To hand a run of consecutive fields to a nested struct, supply a range.
/// Indices are rebased, so the nested struct numbers its own fields from zero.
///
/// ```
/// #[derive(Debug, Default, FromFields)]
/// struct StepClimberData {
///     #[field(5..8)]
///     energy: Energy,
/// }
/// ```
pub use freewheel_derive::FromFields;

/// Receive field readings for a characteristic value.
///
/// Before publishing, fields the flags mark as absent are skipped, and so are
/// those holding their 'unavailable' marker value.
///
/// The default implementation ignores received readings.
///
/// See the [`FromFields`](macro@FromFields) derive macro for an automatic
/// implementation of this trait.
#[allow(unused_variables)]
pub trait FromFields {
    /// Add a reading for a field to the value.
    fn add_reading(&mut self, field: u8, reading: Reading) {}
}

/// Derive [`IntoFields`] for a struct representing a characteristic value.
///
/// Accepts the same attributes as the [`FromFields`](macro@FromFields)
/// derive macro.
pub use freewheel_derive::IntoFields;

/// Supply field values for encoding a characteristic value.
///
/// See the [`IntoFields`](macro@IntoFields) derive macro for an automatic
/// implementation of this trait.
pub trait IntoFields {
    /// Retrieve the value of a field, if it is available.
    fn field(&self, field: u8) -> Option<Sample>;
}

/// A field value supplied for encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// A raw value, written as is.
    Raw(i64),
    /// A real-world value, converted with the field's resolution.
    Real(f64),
    /// A real-world value in a unit, which must match the field's unit.
    Quantity(Measurement),
}

/// Conversion between field readings and the Rust types storing them.
///
/// A reading whose raw value does not fit the storing type (say `300` in a
/// `u8`) converts to `None`, leaving the struct field as if the value were
/// unavailable. Pick a type at least as wide as the field's [`Width`].
///
/// [`Width`]: crate::sans::schema::Width
pub trait FieldType: Sized {
    /// Convert a reading, if it fits this type.
    fn from_reading(reading: Reading) -> Option<Self>;

    /// Convert back to a value for encoding.
    fn to_sample(&self) -> Sample;
}

macro_rules! field_type {
    ($($t:ident),*) => {
        $(
            /// Stores the raw value, ignoring the field's resolution.
            impl FieldType for $t {
                fn from_reading(reading: Reading) -> Option<Self> {
                    let raw = reading.raw();

                    Self::try_from(raw)
                        .inspect_err(|_| {
                            tracing::debug!(raw, ty = stringify!($t), "reading does not fit")
                        })
                        .ok()
                }

                fn to_sample(&self) -> Sample {
                    Sample::Raw(i64::from(*self))
                }
            }
        )*
    };
}

field_type!(u8, u16, u32, i8, i16, i32);

impl FieldType for f64 {
    fn from_reading(reading: Reading) -> Option<Self> {
        Some(reading.value())
    }

    fn to_sample(&self) -> Sample {
        Sample::Real(*self)
    }
}

impl FieldType for Measurement {
    fn from_reading(reading: Reading) -> Option<Self> {
        Some(reading.measurement())
    }

    fn to_sample(&self) -> Sample {
        Sample::Quantity(*self)
    }
}
