use nom::Needed;

use crate::frame::components::FrameControl;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// The frame control header names a subtype this library has no parser
    /// for. The parsed [FrameControl] and the remaining frame body are
    /// passed along for debugging.
    #[error("No parser for frame subtype {:?} ({:?})", .0.frame_subtype, .0.frame_type)]
    UnhandledFrameSubtype(FrameControl, Vec<u8>),

    /// A parser rejected the frame body. Contains a description of the
    /// failure and the data that was being parsed.
    #[error("Malformed frame: {}\ndata: {:?}", .0, .1)]
    Failure(String, Vec<u8>),

    /// The input ended before the frame did.
    #[error("Incomplete frame. {}", .0)]
    Incomplete(String),

    /// The trailing frame check sequence does not match the frame body.
    /// Contains the checksum from the frame and the computed one.
    #[error("FCS mismatch: frame carries {:#010x}, body hashes to {:#010x}", .0, .1)]
    FcsMismatch(u32, u32),
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for Error {
    /// Convert a [nom::error::Error] on a borrowed slice into our owned
    /// error type. Without this, propagating nom errors would drag the
    /// input lifetime through every caller.
    fn from(error: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match error {
            nom::Err::Incomplete(needed) => match needed {
                Needed::Size(size) => {
                    Error::Incomplete(format!("At least {size} more bytes are needed"))
                }
                Needed::Unknown => Error::Incomplete(String::new()),
            },
            nom::Err::Error(error) | nom::Err::Failure(error) => Error::Failure(
                format!("nom::ErrorKind is {:?}", error.code),
                error.input.to_vec(),
            ),
        }
    }
}
