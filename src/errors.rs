use std::error::Error as StdError;
use std::{
    fmt::{Debug, Display},
    io,
};

/// Errors returned by methods in this crate.
#[derive(Debug)]
pub enum Error {
    /// An `io::Error` occurred
    ///
    /// Header reads raise this when the stream is too short to hold the
    /// fixed WAVE header.
    IOError(io::Error),

    /// A sample size that is not a whole number of octets was requested
    InvalidBitsPerSample { bits: u16 },

    /// The stream declares a codec this crate cannot read
    ///
    /// Only 0x0001 (integer PCM) and 0xFFFE (extensible) are accepted.
    UnsupportedFormatTag { tag: u16 },

    /// The buffer carries a format tag this crate cannot serialize
    InvalidFormatTag { tag: u16 },
}

impl StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::IOError(error)
    }
}
