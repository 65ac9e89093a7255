mod elements;
mod frame_control;
mod header;
mod mac_address;
mod sequence_control;

pub use elements::{ElementError, Elements, InformationElement};
pub use frame_control::FrameControl;
pub use header::ManagementHeader;
pub use mac_address::{MacAddress, MacParseError};
pub use sequence_control::SequenceControl;
