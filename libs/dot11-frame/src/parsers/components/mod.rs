use nom::bytes::complete::take;
use nom::IResult;

use crate::frame::components::MacAddress;

mod elements;
mod frame_control;
mod header;
mod sequence_control;

pub use elements::parse_elements;
pub use frame_control::parse_frame_control;
pub use header::parse_management_header;
pub use sequence_control::parse_sequence_control;

/// Take 6 bytes and copy them into a new [MacAddress].
pub fn parse_mac(input: &[u8]) -> IResult<&[u8], MacAddress> {
    let (remaining, bytes) = take(6usize)(input)?;
    Ok((remaining, MacAddress(clone_slice::<6>(bytes))))
}

/// Copy the first `X` bytes of a slice into a fixed-size array.
pub(crate) fn clone_slice<const X: usize>(slice: &[u8]) -> [u8; X] {
    let mut cloned_slice: [u8; X] = [0; X];
    cloned_slice.copy_from_slice(&slice[0..X]);

    cloned_slice
}
