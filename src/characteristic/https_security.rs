use alloc::vec::Vec;

use crate::{
    Error,
    avec::Characteristic,
    sans::cursor::{Cursor, Writer},
};

/// Known authenticity of the HTTP server certificate for a URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HttpsSecurity {
    pub security: bool,
}

impl Characteristic for HttpsSecurity {
    const NAME: &'static str = "HTTPS Security";
    const UUID: &'static str = "2ABB";

    /// Any non-zero byte reads as `true`.
    fn decode(r: &[u8]) -> Result<Self, Error> {
        let security = Cursor::new(r).read_u8()? != 0;
        Ok(Self { security })
    }

    fn encode(&self) -> Result<Vec<u8>, Error> {
        let mut w = Writer::with_capacity(1);
        w.put_u8(u8::from(self.security));
        Ok(w.finish())
    }
}
