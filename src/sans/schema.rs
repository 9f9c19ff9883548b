//! Declarative descriptions of characteristic layouts.

use crate::unit::Unit;

use super::header::Flags;

/// Storage type of a field on the wire. All types are little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    U8,
    U16,
    /// Three bytes, as used by 24-bit flags and distances.
    U24,
    U32,
    I8,
    I16,
    I32,
}

impl Width {
    /// Number of bytes occupied on the wire.
    pub const fn size(self) -> usize {
        match self {
            Width::U8 | Width::I8 => 1,
            Width::U16 | Width::I16 => 2,
            Width::U24 => 3,
            Width::U32 | Width::I32 => 4,
        }
    }

    /// Smallest raw value this type can carry.
    pub const fn min(self) -> i64 {
        match self {
            Width::U8 | Width::U16 | Width::U24 | Width::U32 => 0,
            Width::I8 => i8::MIN as i64,
            Width::I16 => i16::MIN as i64,
            Width::I32 => i32::MIN as i64,
        }
    }

    /// Largest raw value this type can carry.
    pub const fn max(self) -> i64 {
        match self {
            Width::U8 => u8::MAX as i64,
            Width::U16 => u16::MAX as i64,
            Width::U24 => 0xFF_FFFF,
            Width::U32 => u32::MAX as i64,
            Width::I8 => i8::MAX as i64,
            Width::I16 => i16::MAX as i64,
            Width::I32 => i32::MAX as i64,
        }
    }

    /// Interpret little-endian bytes as a raw value of this type.
    ///
    /// The state tokens hand over exactly [`size`](Self::size) bytes; any
    /// beyond that are not considered.
    pub fn from_le(self, r: &[u8]) -> i64 {
        let mut b = [0; 4];
        let n = self.size().min(r.len());
        b[..n].copy_from_slice(&r[..n]);

        let x = u32::from_le_bytes(b);

        match self {
            Width::U8 => x as u8 as i64,
            Width::U16 => x as u16 as i64,
            Width::U24 => (x & 0xFF_FFFF) as i64,
            Width::U32 => x as i64,
            Width::I8 => x as u8 as i8 as i64,
            Width::I16 => x as u16 as i16 as i64,
            Width::I32 => x as i32 as i64,
        }
    }

    /// Little-endian bytes of a raw value, or `None` if it is out of range.
    ///
    /// Only the first [`size`](Self::size) bytes of the result are meaningful.
    pub fn to_le(self, raw: i64) -> Option<[u8; 4]> {
        (self.min()..=self.max())
            .contains(&raw)
            .then(|| (raw as u32).to_le_bytes())
    }
}

/// Fixed-point resolution of a field, as the rational `multiplier / divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    multiplier: i64,
    divisor: i64,
}

impl Scale {
    /// Whole units.
    pub const UNIT: Self = Self::new(1, 1);
    /// Tenths of a unit.
    pub const TENTH: Self = Self::new(1, 10);
    /// Hundredths of a unit.
    pub const HUNDREDTH: Self = Self::new(1, 100);

    /// # Panics
    ///
    /// Panics if `multiplier` is zero or `divisor` is not positive. In a
    /// `const` schema this is a compile-time error; see [`checked`](Self::checked)
    /// for scales built at runtime.
    pub const fn new(multiplier: i64, divisor: i64) -> Self {
        match Self::checked(multiplier, divisor) {
            Some(scale) => scale,
            None => panic!("scale must be non-zero"),
        }
    }

    pub const fn checked(multiplier: i64, divisor: i64) -> Option<Self> {
        if multiplier == 0 || divisor <= 0 {
            return None;
        }

        Some(Self {
            multiplier,
            divisor,
        })
    }

    /// Convert a raw value to its real-world value.
    pub fn apply(self, raw: i64) -> f64 {
        raw.saturating_mul(self.multiplier) as f64 / self.divisor as f64
    }

    /// Convert a real-world value back to its raw value.
    ///
    /// Returns `None` for non-finite values, and for values falling between two
    /// steps of the resolution, which would not survive a decode.
    pub fn invert(self, value: f64) -> Option<i64> {
        if !value.is_finite() {
            return None;
        }

        let x = value * self.divisor as f64 / self.multiplier as f64;

        // Round half away from zero; `as` saturates out-of-range values.
        let raw = if x < 0.0 { (x - 0.5) as i64 } else { (x + 0.5) as i64 };

        // Allow for the error of the multiplication above, not for a step.
        let step = self.multiplier as f64 / self.divisor as f64;
        let tolerance = step.max(-step) * 1e-6;
        let error = self.apply(raw) - value;

        (-tolerance <= error && error <= tolerance).then_some(raw)
    }
}

/// Rule deciding whether a field is transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Always transmitted.
    Always,
    /// Transmitted when the flag bit is set.
    Set(u8),
    /// Transmitted when the flag bit is clear.
    ///
    /// Fitness machine records define their 'more data' bit this way: when
    /// set, the leading field is left out of this value.
    Clear(u8),
}

impl Presence {
    /// Whether a field with this rule is transmitted under the given flags.
    pub const fn is_present(self, flags: Flags) -> bool {
        match self {
            Presence::Always => true,
            Presence::Set(bit) => flags.contains(bit),
            Presence::Clear(bit) => !flags.contains(bit),
        }
    }
}

/// Description of a single field.
///
/// Consecutive fields sharing a [`Presence`] rule are gated together by one
/// flag bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: Width,
    pub presence: Presence,
    pub scale: Scale,
    /// Raw value marking the field as unavailable.
    pub sentinel: Option<i64>,
    pub unit: Unit,
}

impl FieldSpec {
    /// A mandatory, unscaled, unitless field.
    pub const fn new(name: &'static str, width: Width) -> Self {
        Self {
            name,
            width,
            presence: Presence::Always,
            scale: Scale::UNIT,
            sentinel: None,
            unit: Unit::Unitless,
        }
    }

    /// Gate this field on a flag bit being set.
    ///
    /// # Panics
    ///
    /// Panics if `bit` does not fit a 32-bit flags field.
    pub const fn when_set(self, bit: u8) -> Self {
        assert!(bit < Flags::BITS, "flag bit out of range");
        Self {
            presence: Presence::Set(bit),
            ..self
        }
    }

    /// Gate this field on a flag bit being clear.
    ///
    /// # Panics
    ///
    /// Panics if `bit` does not fit a 32-bit flags field.
    pub const fn when_clear(self, bit: u8) -> Self {
        assert!(bit < Flags::BITS, "flag bit out of range");
        Self {
            presence: Presence::Clear(bit),
            ..self
        }
    }

    pub const fn scale(self, scale: Scale) -> Self {
        Self { scale, ..self }
    }

    pub const fn unit(self, unit: Unit) -> Self {
        Self { unit, ..self }
    }

    /// Mark a raw value as 'unavailable'.
    pub const fn sentinel(self, raw: i64) -> Self {
        Self {
            sentinel: Some(raw),
            ..self
        }
    }

    /// Mark the largest raw value of this field's type as 'unavailable'.
    pub const fn sentinel_max(self) -> Self {
        self.sentinel(self.width.max())
    }
}

/// Layout of a characteristic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Type of the leading flags field, if the value has one.
    pub flags: Option<Width>,
    /// Fields in transmission order.
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Number of bytes occupied by the flags field.
    pub const fn flags_size(&self) -> usize {
        match self.flags {
            Some(width) => width.size(),
            None => 0,
        }
    }
}
