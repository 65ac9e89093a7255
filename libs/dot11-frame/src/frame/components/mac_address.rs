use std::fmt;
use std::str::FromStr;

/// A nice representation of a MAC address.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct MacAddress(pub [u8; 6]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacParseError {
    InvalidDigit,
    InvalidLength,
}

impl fmt::Display for MacParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacParseError::InvalidDigit => write!(f, "invalid digit in MAC address"),
            MacParseError::InvalidLength => write!(f, "invalid length for MAC address"),
        }
    }
}

impl std::error::Error for MacParseError {}

impl MacAddress {
    pub fn from_vec(vec: Vec<u8>) -> Option<MacAddress> {
        let bytes: [u8; 6] = vec.try_into().ok()?;
        Some(MacAddress(bytes))
    }

    pub fn encode(&self) -> [u8; 6] {
        self.0
    }

    /// Check whether this is the universal broadcast address.
    pub fn is_broadcast(&self) -> bool {
        self.0 == [255, 255, 255, 255, 255, 255]
    }

    pub fn broadcast() -> MacAddress {
        MacAddress([255, 255, 255, 255, 255, 255])
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

/// Parse a MAC address written with colons, dashes, or as 12 bare hex
/// digits.
impl FromStr for MacAddress {
    type Err = MacParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits: String = if input.contains(':') || input.contains('-') {
            let parts: Vec<&str> = input.split(|c| c == ':' || c == '-').collect();
            if parts.len() != 6 || parts.iter().any(|part| part.len() != 2) {
                return Err(MacParseError::InvalidLength);
            }
            parts.concat()
        } else {
            input.to_string()
        };

        if digits.len() != 12 {
            return Err(MacParseError::InvalidLength);
        }
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(MacParseError::InvalidDigit);
        }

        let mut bytes = [0u8; 6];
        for (index, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&digits[index * 2..index * 2 + 2], 16)
                .map_err(|_| MacParseError::InvalidDigit)?;
        }

        Ok(MacAddress(bytes))
    }
}
