//! States processing the flags field.

use either::Either;

use super::{
    field::{End, Field},
    schema::Schema,
};

/// Bits of a flags field.
///
/// Bits with no meaning in a schema are kept, but never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// Number of bits a flags field can hold.
    pub const BITS: u8 = 32;

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether a bit is set. Bits past [`BITS`](Self::BITS) never are.
    pub const fn contains(self, bit: u8) -> bool {
        bit < Self::BITS && self.0 & (1 << bit) != 0
    }

    /// Set or clear a bit. Bits past [`BITS`](Self::BITS) are ignored.
    pub const fn with(self, bit: u8, value: bool) -> Self {
        match bit {
            _ if bit >= Self::BITS => self,
            _ if value => Self(self.0 | (1 << bit)),
            _ => Self(self.0 & !(1 << bit)),
        }
    }
}

/// State token to decode the flags field of a characteristic value.
#[derive(Debug)]
pub struct Header<'s> {
    schema: &'s Schema,
}

impl<'s> Header<'s> {
    /// Begin walking a value laid out according to a schema.
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Number of bytes needed to advance.
    ///
    /// This is zero for schemas without a flags field.
    pub fn size(&self) -> usize {
        self.schema.flags_size()
    }

    /// Transition to another state by decoding the flags field.
    ///
    /// Returns the flags, and a successor state token for the first
    /// transmitted field.
    ///
    /// `r` must hold exactly [`size`](Self::size) bytes.
    pub fn advance(self, r: &[u8]) -> (Flags, Either<Field<'s>, End>) {
        debug_assert_eq!(r.len(), self.size(), "flags field needs exactly `size` bytes");

        let flags = match self.schema.flags {
            Some(width) => Flags(width.from_le(r) as u32),
            None => Flags::default(),
        };

        tracing::trace!(flags = flags.bits(), "decoded flags");

        (flags, Field::first(self.schema, flags))
    }
}
