use crate::frame_types::*;

/// The first two bytes of every frame: protocol version, frame type and
/// subtype, and the flags byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameControl {
    pub protocol_version: u8,
    pub frame_type: FrameType,
    pub frame_subtype: FrameSubType,
    pub flags: u8,
}

impl FrameControl {
    /// This frame is bound for the distribution system.
    pub fn to_ds(&self) -> bool {
        flag_is_set(self.flags, 0)
    }

    /// This frame comes from the distribution system.
    pub fn from_ds(&self) -> bool {
        flag_is_set(self.flags, 1)
    }

    pub fn more_fragments(&self) -> bool {
        flag_is_set(self.flags, 2)
    }

    pub fn retry(&self) -> bool {
        flag_is_set(self.flags, 3)
    }

    pub fn pwr_mgmt(&self) -> bool {
        flag_is_set(self.flags, 4)
    }

    pub fn more_data(&self) -> bool {
        flag_is_set(self.flags, 5)
    }

    /// The frame body is encrypted.
    pub fn wep(&self) -> bool {
        flag_is_set(self.flags, 6)
    }

    pub fn order(&self) -> bool {
        flag_is_set(self.flags, 7)
    }

    pub fn encode(&self) -> [u8; 2] {
        let mut flags: u8 = 0;

        // Subtype occupies the upper four bits of the first byte,
        // frame type the two below it, protocol version the lowest two.
        flags |= self.frame_subtype.to_bytes() << 4;
        flags |= (self.frame_type as u8) << 2;
        flags |= self.protocol_version;

        [flags, self.flags]
    }
}

fn flag_is_set(flags: u8, bit: u8) -> bool {
    (flags & (1 << bit)) != 0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parsers::parse_frame_control;

    #[test]
    fn test_beacon_control() {
        let bytes = [0x80, 0x00];
        let (_, frame_control) = parse_frame_control(&bytes).unwrap();

        assert_eq!(frame_control.frame_type, FrameType::Management);
        assert_eq!(frame_control.frame_subtype, FrameSubType::Beacon);
        assert_eq!(frame_control.protocol_version, 0);
        assert!(!frame_control.to_ds());
        assert!(!frame_control.from_ds());

        assert_eq!(frame_control.encode(), bytes);
    }

    #[test]
    fn test_flags() {
        // A probe response with the retry and order flags set.
        let bytes = [0x50, 0x88];
        let (_, frame_control) = parse_frame_control(&bytes).unwrap();

        assert_eq!(frame_control.frame_subtype, FrameSubType::ProbeResponse);
        assert!(frame_control.retry());
        assert!(frame_control.order());
        assert!(!frame_control.more_fragments());
        assert!(!frame_control.wep());

        assert_eq!(frame_control.encode(), bytes);
    }
}
