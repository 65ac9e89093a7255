use super::{FrameControl, MacAddress, SequenceControl};
use crate::traits::Addresses;

/// The header shared by all management frames.
///
/// Layout after the two frame control bytes:
///
/// byte 2-3: Duration.
/// byte 4-9: Address 1, the receiver.
/// byte 10-15: Address 2, the transmitter.
/// byte 16-21: Address 3, usually the BSSID.
/// byte 22-23: Sequence control.
///
/// The duration bytes are kept raw. Nothing in this library interprets
/// them, they only need to survive a parse and encode cycle unchanged.
#[derive(Clone, Debug)]
pub struct ManagementHeader {
    pub frame_control: FrameControl,
    pub duration: [u8; 2],
    pub address_1: MacAddress,
    pub address_2: MacAddress,
    pub address_3: MacAddress,
    pub sequence_control: SequenceControl,
}

impl ManagementHeader {
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(24);
        bytes.extend(self.frame_control.encode());
        bytes.extend(self.duration);
        bytes.extend(self.address_1.encode());
        bytes.extend(self.address_2.encode());
        bytes.extend(self.address_3.encode());
        bytes.extend(self.sequence_control.encode());
        bytes
    }
}

/// Which address plays which role depends on the `to_ds` and `from_ds`
/// flags in the frame control header. Management frames sent between an
/// AP and stations carry neither flag, so for the frames this library
/// parses the transmitter is address 2 and the BSSID is address 3.
impl Addresses for ManagementHeader {
    /// The mac address of the sender.
    fn src(&self) -> Option<&MacAddress> {
        let frame_control = &self.frame_control;
        if frame_control.to_ds() {
            Some(&self.address_3)
        } else if frame_control.from_ds() {
            Some(&self.address_1)
        } else {
            Some(&self.address_2)
        }
    }

    /// The mac address of the receiver. A full `ff:ff:..` indicates an
    /// undirected broadcast.
    fn dest(&self) -> &MacAddress {
        let frame_control = &self.frame_control;
        if frame_control.to_ds() && frame_control.from_ds() {
            &self.address_3
        } else if frame_control.to_ds() {
            &self.address_2
        } else if frame_control.from_ds() {
            &self.address_3
        } else {
            &self.address_1
        }
    }

    /// The BSSID, expected to be present for everything outside of a
    /// wireless distributed system.
    fn bssid(&self) -> Option<&MacAddress> {
        let frame_control = &self.frame_control;
        if frame_control.to_ds() {
            Some(&self.address_1)
        } else if frame_control.from_ds() {
            Some(&self.address_2)
        } else {
            Some(&self.address_3)
        }
    }
}
