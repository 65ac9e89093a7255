use nom::number::complete::le_u16;
use nom::IResult;

use crate::frame::components::SequenceControl;

/// Parse the sequence control field. The two bytes form a little-endian
/// u16 with the fragment number in the low nibble and the sequence
/// number in the upper twelve bits.
pub fn parse_sequence_control(input: &[u8]) -> IResult<&[u8], SequenceControl> {
    let (remaining, value) = le_u16(input)?;

    Ok((
        remaining,
        SequenceControl {
            fragment_number: (value & 0x000f) as u8,
            sequence_number: value >> 4,
        },
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_and_encode() {
        let bytes = [0x60, 0x77];
        let (_, sequence_control) = parse_sequence_control(&bytes).unwrap();

        assert_eq!(sequence_control.fragment_number, 0);
        assert_eq!(sequence_control.sequence_number, 1910);
        assert_eq!(sequence_control.encode(), bytes);
    }

    #[test]
    fn test_fragment_nibble() {
        let bytes = [0x13, 0x00];
        let (_, sequence_control) = parse_sequence_control(&bytes).unwrap();

        assert_eq!(sequence_control.fragment_number, 3);
        assert_eq!(sequence_control.sequence_number, 1);
        assert_eq!(sequence_control.encode(), bytes);
    }
}
