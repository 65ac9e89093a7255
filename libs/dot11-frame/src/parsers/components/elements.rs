use nom::bytes::complete::take;
use nom::number::complete::u8 as get_u8;
use nom::sequence::tuple;
use nom::IResult;

use crate::frame::components::{Elements, InformationElement};

/// Parse the tagged elements that fill the rest of a management frame
/// body. The structure of each element looks like this:
///
/// 1 byte: Element id
/// 1 byte: Element length (up to 255 bytes)
/// $element_length bytes: Element payload
///
/// The elements are kept raw and in wire order. The same id may occur
/// more than once, and this library edits and reorders elements, so
/// interpreting them here would only get in the way.
///
/// The input must end where the element list ends. A trailing byte or a
/// length that runs past the input fails the parse.
pub fn parse_elements(mut input: &[u8]) -> IResult<&[u8], Elements> {
    let mut elements = Elements::default();

    let mut element_id;
    let mut length;
    let mut data;
    while !input.is_empty() {
        (input, (element_id, length)) = tuple((get_u8, get_u8))(input)?;
        (input, data) = take(length)(input)?;
        elements.push(InformationElement::from_wire(element_id, data.to_vec()));
    }

    Ok((input, elements))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_elements() {
        let bytes = [
            0, 4, b'A', b'B', b'C', b'D', // SSID "ABCD"
            1, 3, 0x82, 0x84, 0x8b, // Supported rates
            3, 1, 6, // DS parameter, channel 6
        ];
        let (remaining, elements) = parse_elements(&bytes).unwrap();

        assert!(remaining.is_empty());
        assert_eq!(elements.len(), 3);
        assert_eq!(elements.ssid(), Some("ABCD".to_string()));
        assert_eq!(elements.get(2).unwrap().payload(), &[6]);
        assert_eq!(elements.encode(), bytes);
    }

    #[test]
    fn test_truncated_element_fails() {
        // Length byte claims 10 bytes, only 2 follow.
        let bytes = [0, 10, b'A', b'B'];
        assert!(parse_elements(&bytes).is_err());

        // A lone trailing byte can't form an element.
        let bytes = [0, 1, b'A', 0xff];
        assert!(parse_elements(&bytes).is_err());
    }

    #[test]
    fn test_empty_body() {
        let (_, elements) = parse_elements(&[]).unwrap();
        assert!(elements.is_empty());
    }
}
