use nom::number::complete::{le_u16, le_u64};
use nom::sequence::tuple;

use crate::error::Error;
use crate::frame::components::FrameControl;
use crate::frame::*;
use crate::parsers::{parse_elements, parse_management_header};

/// Parse a [Beacon] frame.
///
/// The general structure is:
/// - ManagementHeader
/// - Timestamp
/// - Beacon interval
/// - Capability info
/// - Tagged elements
pub fn parse_beacon(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (input, header) = parse_management_header(frame_control, input)?;

    let (_, (timestamp, beacon_interval, capability_info, elements)) =
        tuple((le_u64, le_u16, le_u16, parse_elements))(input)?;

    Ok(Frame::Beacon(Beacon {
        header,
        timestamp,
        beacon_interval,
        capability_info,
        elements,
    }))
}

/// Parse a [ProbeResponse] frame. The body is identical to a beacon.
pub fn parse_probe_response(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (input, header) = parse_management_header(frame_control, input)?;

    let (_, (timestamp, beacon_interval, capability_info, elements)) =
        tuple((le_u64, le_u16, le_u16, parse_elements))(input)?;

    Ok(Frame::ProbeResponse(ProbeResponse {
        header,
        timestamp,
        beacon_interval,
        capability_info,
        elements,
    }))
}
