#[macro_use] extern crate lazy_static;

mod dispatch;
mod tools;

pub mod id3v2;
pub mod id3v230;


pub use crate::dispatch::decode;
pub use crate::dispatch::version_label;
pub use crate::dispatch::DecodeFn;
pub use crate::dispatch::Registry;
pub use crate::dispatch::Version;
pub use crate::id3v2::size_to_synch_safe;
pub use crate::id3v2::synch_safe_to_size;
pub use crate::id3v2::Tag;
pub use crate::id3v230::Id3v230Tag;

use std::io;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    // missing "ID3" identifier, or the stream ran dry where a frame body was expected
    FormatError(String),
    // valid identifier, but no codec registered; carries the version label
    VersionError(String),
    SizeMismatch { expected: u32, actual: u32 },
    ValidationError(String),
    // value does not fit into 28 bits
    RangeError(u32),
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref e) => write!(f, "IO error: {}", e),
            Error::FormatError(ref e) => write!(f, "Unknown tag format: {}", e),
            Error::VersionError(ref v) => write!(f, "Unknown tag version: {}", v),
            Error::SizeMismatch { expected, actual } => write!(
                f,
                "Expected frame size {} but got {} bytes",
                expected, actual
            ),
            Error::ValidationError(ref e) => write!(f, "Invalid frame: {}", e),
            Error::RangeError(v) => write!(f, "Size 0x{:08X} uses more than 28 bits", v),
        }
    }
}

use std::error;
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}
