#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceControl {
    /// The 4 bit fragment number from the low nibble of the field.
    pub fragment_number: u8,
    /// The 12 bit sequence number from the upper bits.
    pub sequence_number: u16,
}

impl SequenceControl {
    pub fn encode(&self) -> [u8; 2] {
        let combined: u16 =
            ((self.sequence_number & 0x0fff) << 4) | (u16::from(self.fragment_number) & 0x000f);
        combined.to_le_bytes()
    }
}
