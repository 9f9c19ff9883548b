use alloc::string::String;

use crate::{Error, avec::Characteristic, sans::cursor::Cursor};

/// Read a string running to the end of a value.
///
/// Trailing NUL padding is trimmed. Invalid UTF-8 reads as an empty string.
fn lenient_string(cursor: Cursor<'_>) -> String {
    core::str::from_utf8(cursor.remaining())
        .map(|s| s.trim_end_matches('\0'))
        .unwrap_or_default()
        .into()
}

macro_rules! revision_string {
    ($t:ident, $name:literal, $uuid:literal, $(#[$attr:meta])*) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $t {
            pub revision: String,
        }

        impl Characteristic for $t {
            const NAME: &'static str = $name;
            const UUID: &'static str = $uuid;

            fn decode(r: &[u8]) -> Result<Self, Error> {
                Ok(Self {
                    revision: lenient_string(Cursor::new(r)),
                })
            }
        }
    };
}

revision_string!(SoftwareRevisionString, "Software Revision String", "2A28", /** Revision of the software within a device. */);
revision_string!(FirmwareRevisionString, "Firmware Revision String", "2A26", /** Revision of the firmware within a device. */);
revision_string!(HardwareRevisionString, "Hardware Revision String", "2A27", /** Revision of the hardware within a device. */);
