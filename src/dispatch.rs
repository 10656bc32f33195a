use std::io::prelude::*;
use std::io::Cursor;

use crate::id3v2::{Tag, FILE_IDENTIFIER};
use crate::id3v230;
use crate::tools::format_error;
use crate::Error;

/// Reads a whole tag, starting at the "ID3" identifier.
pub type DecodeFn = fn(&mut dyn Read) -> Result<Box<dyn Tag>, Error>;

/// An ID3v2 version and how to decode it.
#[derive(Clone, Copy)]
pub struct Version {
    pub major: u8,
    pub revision: u8,
    pub decode: DecodeFn,
}

/// Version table used to pick a codec for a stream.
///
/// Entries are only ever appended. Registering the same version twice is
/// allowed, lookups return the first one registered.
#[derive(Clone)]
pub struct Registry {
    versions: Vec<Version>,
}

impl Default for Registry {
    /// A registry knowing every revision this crate implements.
    fn default() -> Registry {
        let mut registry = Registry::new();
        registry.register(id3v230::MAJOR, id3v230::REVISION, id3v230::decode);
        registry
    }
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Registry {
        Registry {
            versions: Vec::new(),
        }
    }

    pub fn register(&mut self, major: u8, revision: u8, decode: DecodeFn) {
        self.versions.push(Version {
            major,
            revision,
            decode,
        });
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn find(&self, major: u8, revision: u8) -> Option<&Version> {
        self.versions
            .iter()
            .find(|v| v.major == major && v.revision == revision)
    }

    /// Decodes the tag at the start of `input`, returning it together with a
    /// label such as `"id3v2.3.0"`.
    ///
    /// The first 5 bytes are only peeked at, the matching codec gets the
    /// stream from the identifier on. If the reader has fewer than 5 bytes
    /// buffered, up to 5 bytes are read and handed back to the codec in front
    /// of the rest of the stream. An unknown version is reported as
    /// [`Error::VersionError`] carrying the label of the version found.
    pub fn decode<R: BufRead>(&self, input: &mut R) -> Result<(Box<dyn Tag>, String), Error> {
        let buffered = input.fill_buf()?;
        if buffered.len() >= PEEK_SIZE {
            let (major, revision) = sniff(&buffered[..PEEK_SIZE])?;
            return self.dispatch(major, revision, input);
        }

        // short reads, keep going until 5 bytes or the real end of stream
        let mut peeked = Vec::with_capacity(PEEK_SIZE);
        Read::take(&mut *input, PEEK_SIZE as u64).read_to_end(&mut peeked)?;
        let (major, revision) = sniff(&peeked)?;
        self.dispatch(major, revision, &mut Cursor::new(peeked).chain(input))
    }

    fn dispatch<S: Read>(
        &self,
        major: u8,
        revision: u8,
        input: &mut S,
    ) -> Result<(Box<dyn Tag>, String), Error> {
        match self.find(major, revision) {
            Some(version) => {
                let tag = (version.decode)(input)?;
                Ok((tag, version_label(version.major, version.revision)))
            }
            None => Err(Error::VersionError(version_label(major, revision))),
        }
    }
}

// "ID3" followed by major and revision
const PEEK_SIZE: usize = 5;

fn sniff(peek: &[u8]) -> Result<(u8, u8), Error> {
    if peek.len() < PEEK_SIZE {
        return Err(format_error("stream too short for an ID3v2 header"));
    }
    if &peek[0..3] != FILE_IDENTIFIER {
        return Err(format_error("ID3v2 header not found"));
    }
    Ok((peek[3], peek[4]))
}

lazy_static! {
    static ref DEFAULT_REGISTRY: Registry = Registry::default();
}

/// Decodes with the built-in registry. See [`Registry::decode`].
pub fn decode<R: BufRead>(input: &mut R) -> Result<(Box<dyn Tag>, String), Error> {
    DEFAULT_REGISTRY.decode(input)
}

pub fn version_label(major: u8, revision: u8) -> String {
    format!("id3v2.{}.{}", major, revision)
}
