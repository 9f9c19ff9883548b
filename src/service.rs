//! Service descriptors.
//!
//! A service groups related characteristics under an assigned identity. The
//! descriptors here are purely descriptive: they hold no decoded values.

/// Identity of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Service {
    /// Display name.
    pub name: &'static str,
    /// Assigned 16-bit UUID, as four hexadecimal digits.
    pub uuid: &'static str,
    /// Reverse-DNS identifier assigned alongside the UUID.
    pub uniform_identifier: &'static str,
    /// UUIDs of the characteristics this crate decodes for the service.
    pub characteristics: &'static [&'static str],
}

pub const TX_POWER: Service = Service {
    name: "Tx Power",
    uuid: "1804",
    uniform_identifier: "org.bluetooth.service.tx_power",
    characteristics: &["2A07"],
};

pub const CURRENT_TIME: Service = Service {
    name: "Current Time",
    uuid: "1805",
    uniform_identifier: "org.bluetooth.service.current_time",
    characteristics: &["2A2B"],
};

pub const DEVICE_INFORMATION: Service = Service {
    name: "Device Information",
    uuid: "180A",
    uniform_identifier: "org.bluetooth.service.device_information",
    characteristics: &["2A26", "2A27", "2A28"],
};

pub const ENVIRONMENTAL_SENSING: Service = Service {
    name: "Environmental Sensing",
    uuid: "181A",
    uniform_identifier: "org.bluetooth.service.environmental_sensing",
    characteristics: &["2A76"],
};

pub const HTTP_PROXY: Service = Service {
    name: "HTTP Proxy",
    uuid: "1823",
    uniform_identifier: "org.bluetooth.service.http_proxy",
    characteristics: &["2ABB"],
};

pub const OBJECT_TRANSFER: Service = Service {
    name: "Object Transfer",
    uuid: "1825",
    uniform_identifier: "org.bluetooth.service.object_transfer",
    characteristics: &["2AC0"],
};

pub const FITNESS_MACHINE: Service = Service {
    name: "Fitness Machine",
    uuid: "1826",
    uniform_identifier: "org.bluetooth.service.fitness_machine",
    characteristics: &["2ACD", "2ACE", "2ACF"],
};

/// All known services.
pub const SERVICES: &[Service] = &[
    TX_POWER,
    CURRENT_TIME,
    DEVICE_INFORMATION,
    ENVIRONMENTAL_SENSING,
    HTTP_PROXY,
    OBJECT_TRANSFER,
    FITNESS_MACHINE,
];

/// Look up a service by its UUID, compared case-insensitively.
pub fn lookup(uuid: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.uuid.eq_ignore_ascii_case(uuid))
}
