use crate::frame::components::{Elements, MacAddress, ManagementHeader};
use crate::traits::Addresses;

/// A beacon, the management frame an AP broadcasts to announce itself.
///
/// After the header come a 64 bit microsecond timestamp, the beacon
/// interval in time units, the capability bitmap, and the element list
/// that carries everything else, the SSID included.
#[derive(Clone, Debug)]
pub struct Beacon {
    pub header: ManagementHeader,
    pub timestamp: u64,
    pub beacon_interval: u16,
    pub capability_info: u16,
    pub elements: Elements,
}

impl Beacon {
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.header.encode());
        bytes.extend(self.timestamp.to_le_bytes());
        bytes.extend(self.beacon_interval.to_le_bytes());
        bytes.extend(self.capability_info.to_le_bytes());
        bytes.extend(self.elements.encode());
        bytes
    }

    pub fn ssid(&self) -> Option<String> {
        self.elements.ssid()
    }
}

impl Addresses for Beacon {
    fn src(&self) -> Option<&MacAddress> {
        self.header.src()
    }

    fn dest(&self) -> &MacAddress {
        self.header.dest()
    }

    fn bssid(&self) -> Option<&MacAddress> {
        self.header.bssid()
    }
}

/// A probe response. On the wire it is a beacon in all but name, sent
/// directly to the station that asked instead of to the broadcast
/// address.
#[derive(Clone, Debug)]
pub struct ProbeResponse {
    pub header: ManagementHeader,
    pub timestamp: u64,
    pub beacon_interval: u16,
    pub capability_info: u16,
    pub elements: Elements,
}

impl ProbeResponse {
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.header.encode());
        bytes.extend(self.timestamp.to_le_bytes());
        bytes.extend(self.beacon_interval.to_le_bytes());
        bytes.extend(self.capability_info.to_le_bytes());
        bytes.extend(self.elements.encode());
        bytes
    }

    pub fn ssid(&self) -> Option<String> {
        self.elements.ssid()
    }
}

impl Addresses for ProbeResponse {
    fn src(&self) -> Option<&MacAddress> {
        self.header.src()
    }

    fn dest(&self) -> &MacAddress {
        self.header.dest()
    }

    fn bssid(&self) -> Option<&MacAddress> {
        self.header.bssid()
    }
}
