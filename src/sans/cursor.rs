//! Little-endian byte primitives.

use alloc::vec::Vec;

use crate::ParseError;

use super::schema::Width;

/// Sequential reader over a byte slice.
#[derive(Debug, Clone)]
pub struct Cursor<'d> {
    data: &'d [u8],
    pos: usize,
}

impl<'d> Cursor<'d> {
    pub fn new(data: &'d [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Take a slice of bytes, advancing the cursor.
    pub fn slice(&mut self, n: usize) -> Result<&'d [u8], ParseError> {
        let remaining = self.available();

        if remaining < n {
            Err(ParseError::EndOfBuffer {
                needed: n,
                remaining,
            })?;
        }

        let s = &self.data[self.pos..self.pos + n];
        self.pos += n;

        Ok(s)
    }

    /// Take an exact number of bytes, advancing the cursor.
    pub fn take<const N: usize>(&mut self) -> Result<[u8; N], ParseError> {
        let mut r = [0; N];
        r.copy_from_slice(self.slice(N)?);
        Ok(r)
    }

    pub fn read_u8(&mut self) -> Result<u8, ParseError> {
        Ok(u8::from_le_bytes(self.take()?))
    }

    pub fn read_u16(&mut self) -> Result<u16, ParseError> {
        Ok(u16::from_le_bytes(self.take()?))
    }

    /// Read a three-byte unsigned integer.
    pub fn read_u24(&mut self) -> Result<u32, ParseError> {
        let [a, b, c] = self.take()?;
        Ok(u32::from_le_bytes([a, b, c, 0]))
    }

    pub fn read_u32(&mut self) -> Result<u32, ParseError> {
        Ok(u32::from_le_bytes(self.take()?))
    }

    pub fn read_i8(&mut self) -> Result<i8, ParseError> {
        Ok(i8::from_le_bytes(self.take()?))
    }

    pub fn read_i16(&mut self) -> Result<i16, ParseError> {
        Ok(i16::from_le_bytes(self.take()?))
    }

    /// Number of bytes left to read.
    pub fn available(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Consume the cursor, returning the unread bytes.
    pub fn remaining(self) -> &'d [u8] {
        &self.data[self.pos..]
    }
}

/// Sequential writer into a growable buffer.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    data: Vec<u8>,
}

impl Writer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn append(&mut self, r: &[u8]) {
        self.data.extend_from_slice(r);
    }

    pub fn put_u8(&mut self, x: u8) {
        self.data.push(x);
    }

    pub fn put_u16(&mut self, x: u16) {
        self.append(&x.to_le_bytes());
    }

    /// Write the low three bytes of an unsigned integer.
    pub fn put_u24(&mut self, x: u32) {
        self.append(&x.to_le_bytes()[..3]);
    }

    pub fn put_u32(&mut self, x: u32) {
        self.append(&x.to_le_bytes());
    }

    /// Write a raw value as the given type.
    ///
    /// Returns `false`, writing nothing, if the value is out of range.
    #[must_use]
    pub fn put(&mut self, width: Width, raw: i64) -> bool {
        match width.to_le(raw) {
            Some(r) => {
                self.append(&r[..width.size()]);
                true
            }
            None => false,
        }
    }

    /// Consume the writer, returning the written bytes.
    pub fn finish(self) -> Vec<u8> {
        self.data
    }
}
