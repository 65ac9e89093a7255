use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// The payload does not fit the one-byte length field.
    #[error("An element payload of {} bytes does not fit the one-byte length field", .0)]
    PayloadTooLong(usize),
    /// An element index pointed past the end of the element list.
    #[error("No element at index {}, the frame carries {} elements", .0, .1)]
    OutOfBounds(usize, usize),
}

/// A single tagged element from a management frame body.
///
/// The length byte is not stored. It is derived from the payload whenever
/// the element is serialized, so an edit can never leave the two out of
/// sync. Payloads above [MAX_PAYLOAD](Self::MAX_PAYLOAD) bytes are
/// rejected at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InformationElement {
    id: u8,
    payload: Vec<u8>,
}

impl InformationElement {
    /// The length field is a single byte.
    pub const MAX_PAYLOAD: usize = 255;

    /// Element ids this crate refers to by name.
    pub const SSID: u8 = 0;
    pub const SUPPORTED_RATES: u8 = 1;
    pub const DS_PARAMETER: u8 = 3;

    pub fn new(id: u8, payload: Vec<u8>) -> Result<Self, ElementError> {
        if payload.len() > Self::MAX_PAYLOAD {
            return Err(ElementError::PayloadTooLong(payload.len()));
        }
        Ok(Self { id, payload })
    }

    /// Build an element from an already parsed id and payload. The wire
    /// format bounds the payload to 255 bytes, so no check is needed.
    pub(crate) fn from_wire(id: u8, payload: Vec<u8>) -> Self {
        debug_assert!(payload.len() <= Self::MAX_PAYLOAD);
        Self { id, payload }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// The length byte as it will appear on the wire.
    pub fn len(&self) -> u8 {
        self.payload.len() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn set_id(&mut self, id: u8) {
        self.id = id;
    }

    pub fn set_payload(&mut self, payload: Vec<u8>) -> Result<(), ElementError> {
        if payload.len() > Self::MAX_PAYLOAD {
            return Err(ElementError::PayloadTooLong(payload.len()));
        }
        self.payload = payload;
        Ok(())
    }

    pub fn encode_into(&self, bytes: &mut Vec<u8>) {
        bytes.push(self.id);
        bytes.push(self.payload.len() as u8);
        bytes.extend(&self.payload);
    }

    /// Human readable name for a well known element id.
    pub fn id_name(id: u8) -> &'static str {
        match id {
            0 => "SSID",
            1 => "Supported Rates",
            3 => "DS Parameter",
            5 => "TIM",
            7 => "Country",
            32 => "Power Constraint",
            42 => "ERP",
            45 => "HT Capabilities",
            48 => "RSN",
            50 => "Extended Rates",
            61 => "HT Operation",
            74 => "Overlapping BSS Scan",
            127 => "Extended Capabilities",
            191 => "VHT Capabilities",
            192 => "VHT Operation",
            221 => "Vendor Specific",
            _ => "Unknown",
        }
    }
}

/// The ordered element list of a management frame body.
///
/// Element order is kept exactly as parsed. The same id may occur more
/// than once, and reordering elements is one of the edits this library
/// performs on purpose.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Elements(Vec<InformationElement>);

impl Elements {
    pub fn new(elements: Vec<InformationElement>) -> Self {
        Self(elements)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InformationElement> {
        self.0.iter()
    }

    pub fn push(&mut self, element: InformationElement) {
        self.0.push(element);
    }

    pub fn get(&self, index: usize) -> Result<&InformationElement, ElementError> {
        let count = self.0.len();
        self.0
            .get(index)
            .ok_or(ElementError::OutOfBounds(index, count))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut InformationElement, ElementError> {
        let count = self.0.len();
        self.0
            .get_mut(index)
            .ok_or(ElementError::OutOfBounds(index, count))
    }

    /// Exchange the elements at the two indices, ids and payloads alike.
    pub fn swap(&mut self, first: usize, second: usize) -> Result<(), ElementError> {
        let count = self.0.len();
        for index in [first, second] {
            if index >= count {
                return Err(ElementError::OutOfBounds(index, count));
            }
        }
        self.0.swap(first, second);
        Ok(())
    }

    /// The first element carrying the given id, in wire order.
    pub fn first_of(&self, id: u8) -> Option<&InformationElement> {
        self.0.iter().find(|element| element.id() == id)
    }

    pub fn first_of_mut(&mut self, id: u8) -> Option<&mut InformationElement> {
        self.0.iter_mut().find(|element| element.id() == id)
    }

    /// The SSID from the first SSID element, if the frame carries one.
    /// Non UTF-8 bytes are replaced, real networks do broadcast those.
    pub fn ssid(&self) -> Option<String> {
        self.first_of(InformationElement::SSID)
            .map(|element| String::from_utf8_lossy(element.payload()).to_string())
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        for element in &self.0 {
            element.encode_into(&mut bytes);
        }
        bytes
    }
}

impl<'a> IntoIterator for &'a Elements {
    type Item = &'a InformationElement;
    type IntoIter = std::slice::Iter<'a, InformationElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fixture() -> Elements {
        Elements::new(vec![
            InformationElement::new(0, b"Test SSID".to_vec()).unwrap(),
            InformationElement::new(1, vec![0x82, 0x84, 0x8b]).unwrap(),
            InformationElement::new(3, vec![6]).unwrap(),
        ])
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        let payload = vec![0u8; 256];
        assert_eq!(
            InformationElement::new(0, payload.clone()),
            Err(ElementError::PayloadTooLong(256))
        );

        let mut element = InformationElement::new(0, Vec::new()).unwrap();
        assert_eq!(
            element.set_payload(payload),
            Err(ElementError::PayloadTooLong(256))
        );
        // The failed edit must not change the element.
        assert_eq!(element.len(), 0);
    }

    #[test]
    fn test_length_follows_payload() {
        let mut element = InformationElement::new(0, b"old".to_vec()).unwrap();
        assert_eq!(element.len(), 3);

        element.set_payload(vec![b'A'; 32]).unwrap();
        assert_eq!(element.len(), 32);

        let mut bytes = Vec::new();
        element.encode_into(&mut bytes);
        assert_eq!(bytes.len(), 34);
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[1], 32);
        assert_eq!(&bytes[2..], &[b'A'; 32]);
    }

    #[test]
    fn test_swap() {
        let mut elements = fixture();
        elements.swap(0, 1).unwrap();

        assert_eq!(elements.get(0).unwrap().id(), 1);
        assert_eq!(elements.get(0).unwrap().payload(), &[0x82, 0x84, 0x8b]);
        assert_eq!(elements.get(1).unwrap().id(), 0);
        assert_eq!(elements.get(1).unwrap().payload(), b"Test SSID");
        // Elements outside the pair stay put.
        assert_eq!(elements.get(2).unwrap().id(), 3);

        assert_eq!(
            elements.swap(0, 3),
            Err(ElementError::OutOfBounds(3, 3))
        );
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut elements = fixture();
        assert_eq!(
            elements.get(7).err(),
            Some(ElementError::OutOfBounds(7, 3))
        );
        assert_eq!(
            elements.get_mut(3).err(),
            Some(ElementError::OutOfBounds(3, 3))
        );
    }

    #[test]
    fn test_ssid_lookup() {
        let elements = fixture();
        assert_eq!(elements.ssid(), Some("Test SSID".to_string()));
        assert_eq!(elements.first_of(48), None);
    }
}
