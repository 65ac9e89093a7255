/// This library's own [Error](error::Error) implementation.
pub mod error;
/// The [Frame](frame::Frame) enum and the frame structs.
pub mod frame;
/// Enums representing frame types and frame subtypes.
mod frame_types;
/// [nom] parsers for the wire format.
pub mod parsers;
/// Traits provided by this library.
mod traits;

use crate::error::Error;
use crate::parsers::*;

// Re-exports for user convenience
pub use crate::frame::Frame;
pub use crate::frame_types::*;
pub use crate::traits::*;

use crc::{Crc, CRC_32_ISO_HDLC};

// CRC algorithm for FCS calculation
const CRC_32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Parse an IEEE 802.11 management frame from raw bytes.
///
/// `fcs_included` tells the parser that the capture kept the frame check
/// sequence. The trailing four bytes are then verified against the frame
/// body and stripped before parsing, so a corrupted capture fails here
/// instead of producing a frame with garbage in its last elements.
pub fn parse_frame(input: &[u8], fcs_included: bool) -> Result<Frame, Error> {
    let input = if fcs_included {
        if input.len() < 4 {
            return Err(Error::Incomplete(
                "Too short to carry a frame check sequence".to_string(),
            ));
        }

        let (frame_data, fcs_bytes) = input.split_at(input.len() - 4);

        let crc = CRC_32.checksum(frame_data);
        let fcs = u32::from_le_bytes([fcs_bytes[0], fcs_bytes[1], fcs_bytes[2], fcs_bytes[3]]);
        if crc != fcs {
            return Err(Error::FcsMismatch(fcs, crc));
        }

        frame_data
    } else {
        input
    };

    let (input, frame_control) = parse_frame_control(input)?;

    match frame_control.frame_subtype {
        FrameSubType::Beacon => parse_beacon(frame_control, input),
        FrameSubType::ProbeResponse => parse_probe_response(frame_control, input),
        _ => Err(Error::UnhandledFrameSubtype(frame_control, input.to_vec())),
    }
}
