use alloc::vec::Vec;

use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::{Error, avec::Characteristic, sans::cursor::Cursor};

/// Current and allocated size of an object, in octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ObjectSize {
    pub current_size: u32,
    pub allocated_size: u32,
}

#[repr(C, packed)]
#[derive(FromBytes, IntoBytes, Immutable)]
struct ObjectSizeValue {
    current_size: [u8; 4],
    allocated_size: [u8; 4],
}

impl Characteristic for ObjectSize {
    const NAME: &'static str = "Object Size";
    const UUID: &'static str = "2AC0";

    fn decode(r: &[u8]) -> Result<Self, Error> {
        let ObjectSizeValue {
            current_size,
            allocated_size,
        } = zerocopy::transmute!(Cursor::new(r).take::<8>()?);

        Ok(Self {
            current_size: u32::from_le_bytes(current_size),
            allocated_size: u32::from_le_bytes(allocated_size),
        })
    }

    fn encode(&self) -> Result<Vec<u8>, Error> {
        let r: [u8; 8] = zerocopy::transmute!(ObjectSizeValue {
            current_size: self.current_size.to_le_bytes(),
            allocated_size: self.allocated_size.to_le_bytes(),
        });

        Ok(r.to_vec())
    }
}
