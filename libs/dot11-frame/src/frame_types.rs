/// Frame type from bits 2-3 of the frame control field.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FrameType {
    Management,
    Control,
    Data,
    Unknown,
}

/// Management frame subtypes from bits 4-7 of the frame control field.
///
/// Only management frames are decoded by this library. Control and data
/// frames are classified as [FrameSubType::Unhandled] and reported through
/// [Error::UnhandledFrameSubtype](crate::error::Error::UnhandledFrameSubtype).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FrameSubType {
    AssociationRequest,
    AssociationResponse,
    ReassociationRequest,
    ReassociationResponse,
    ProbeRequest,
    ProbeResponse,
    TimingAdvertisement,
    Beacon,
    Atim,
    Disassociation,
    Authentication,
    Deauthentication,
    Action,
    ActionNoAck,

    Reserved,
    Unhandled,
}

impl FrameSubType {
    /// The subtype bits as they appear in the frame control field.
    /// [Reserved](FrameSubType::Reserved) and
    /// [Unhandled](FrameSubType::Unhandled) map onto the reserved value.
    pub fn to_bytes(&self) -> u8 {
        match self {
            FrameSubType::AssociationRequest => 0,
            FrameSubType::AssociationResponse => 1,
            FrameSubType::ReassociationRequest => 2,
            FrameSubType::ReassociationResponse => 3,
            FrameSubType::ProbeRequest => 4,
            FrameSubType::ProbeResponse => 5,
            FrameSubType::TimingAdvertisement => 6,
            FrameSubType::Reserved => 7,
            FrameSubType::Beacon => 8,
            FrameSubType::Atim => 9,
            FrameSubType::Disassociation => 10,
            FrameSubType::Authentication => 11,
            FrameSubType::Deauthentication => 12,
            FrameSubType::Action => 13,
            FrameSubType::ActionNoAck => 14,
            FrameSubType::Unhandled => 15,
        }
    }
}
