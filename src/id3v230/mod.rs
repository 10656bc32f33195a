//! ID3v2.3.0, as described at <http://id3.org/id3v2.3.0>.

use std::collections::HashMap;
use std::convert::TryFrom;
use std::io::prelude::*;

use crate::id3v2::tools::check_frame_id;
use crate::id3v2::{Tag, HEADER_SIZE};
use crate::tools::validation_error;
use crate::Error;

pub mod frames;
mod read;
pub mod structure;

use self::structure::{ExtendedHeader, FrameHeader, Header};
use self::structure::{EXTENDED_HEADER_SIZE, FRAME_HEADER_SIZE};

pub const MAJOR: u8 = 3;
pub const REVISION: u8 = 0;
pub const VERSION_STRING: &str = "id3v2.3.0";

#[derive(Debug, Clone, PartialEq)]
pub struct Id3v230Tag {
    header: Header,
    extended_header: Option<ExtendedHeader>,
    crc32: Option<u32>,

    frames: HashMap<String, Vec<u8>>,
    frame_order: Vec<String>,
}

impl Default for Id3v230Tag {
    fn default() -> Id3v230Tag {
        Id3v230Tag {
            header: Header {
                version: [MAJOR, REVISION],
                ..Default::default()
            },
            extended_header: None,
            crc32: None,
            frames: HashMap::new(),
            frame_order: Vec::new(),
        }
    }
}

impl Id3v230Tag {
    /// An empty tag with no frames.
    pub fn new() -> Id3v230Tag {
        Default::default()
    }

    /// Header as it was read. The size follows `set_frames`.
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn extended_header(&self) -> Option<&ExtendedHeader> {
        self.extended_header.as_ref()
    }

    /// CRC-32 from the extended header, unverified.
    pub fn crc32(&self) -> Option<u32> {
        self.crc32
    }

    pub fn padding(&self) -> u32 {
        self.extended_header.map_or(0, |e| e.padding_size)
    }

    fn frame_section_size(&self) -> u32 {
        self.frame_order
            .iter()
            .filter_map(|id| self.frames.get(id))
            .fold(0u32, |acc, data| {
                acc.saturating_add(FRAME_HEADER_SIZE)
                    .saturating_add(u32::try_from(data.len()).unwrap_or(u32::MAX))
            })
    }
}

impl Tag for Id3v230Tag {
    fn frames(&self) -> &HashMap<String, Vec<u8>> {
        &self.frames
    }

    fn frame_order(&self) -> &[String] {
        &self.frame_order
    }

    fn set_frames(&mut self, frames: HashMap<String, Vec<u8>>) {
        // new ids go to the end, sorted, so they are written out too
        let mut added: Vec<String> = frames
            .keys()
            .filter(|id| !self.frame_order.contains(id))
            .cloned()
            .collect();
        added.sort();
        self.frame_order.extend(added);

        self.frames = frames;
        self.header.size = self.frame_section_size();
    }

    fn size(&self) -> u32 {
        self.header.size.saturating_add(HEADER_SIZE)
    }

    fn version(&self) -> (u8, u8) {
        (MAJOR, REVISION)
    }
}

/// Entry point for the registry. See [`read_tag`].
pub fn decode(input: &mut dyn Read) -> Result<Box<dyn Tag>, Error> {
    Ok(Box::new(read_tag(input)?))
}

/// Reads a tag starting at the "ID3" identifier.
///
/// Stops at the declared size or at the first padding byte, whichever comes
/// first; padding is left in the stream. The CRC in the extended header is
/// read and kept but never checked.
pub fn read_tag<T: Read + ?Sized>(input: &mut T) -> Result<Id3v230Tag, Error> {
    let header = read::header(input)?;
    let mut remaining = header.size;

    let mut tag = Id3v230Tag {
        header,
        ..Default::default()
    };

    if header.has_extended_header() {
        let extended_header = read::extended_header(input)?;
        remaining = remaining.saturating_sub(EXTENDED_HEADER_SIZE);

        if extended_header.has_crc32() {
            remaining = remaining.saturating_sub(4);
            tag.crc32 = Some(read::crc32(input)?);
        }
        tag.extended_header = Some(extended_header);
    }

    while remaining > 0 {
        let frame = read::frame_header(input)?;
        remaining = remaining.saturating_sub(FRAME_HEADER_SIZE);

        if frame.is_padding() {
            break;
        }

        let data = read::body(input, &frame)?;
        remaining = remaining.saturating_sub(frame.size);

        let name = frame.name();
        tag.frame_order.push(name.clone());
        tag.frames.insert(name, data);
    }

    Ok(tag)
}

/// Writes `tag` as ID3v2.3.0.
///
/// Frames are written in `frame_order`, skipping ids without a body. The
/// header always gets flags 0 and no extended header is written, whatever the
/// tag was decoded from. Frames are staged in memory first, so an invalid
/// frame id fails before anything reaches `output`.
pub fn encode<W: Write + ?Sized>(output: &mut W, tag: &dyn Tag) -> Result<(), Error> {
    let mut vec: Vec<u8> = Vec::new();

    for id in tag.frame_order() {
        // the frame may have been removed since
        let data = match tag.frames().get(id) {
            Some(data) => data,
            None => continue,
        };

        check_frame_id(id)?;
        if !frames::is_supported(id) {
            return Err(validation_error(format!("unsupported frame ID '{}'", id)));
        }

        let frame = FrameHeader {
            id: crate::tools::field(id.as_bytes(), 0),
            size: u32::try_from(data.len()).map_err(|_| Error::RangeError(u32::MAX))?,
            flags: 0,
        };
        vec.extend_from_slice(&frame.to_bytes());
        vec.extend_from_slice(data);
    }

    let header = Header {
        version: [MAJOR, REVISION],
        flags: 0,
        size: u32::try_from(vec.len()).unwrap_or(u32::MAX),
    };

    output.write_all(&header.to_bytes()?)?;
    output.write_all(&vec)?;
    Ok(())
}

#[cfg(test)]
mod tests;
