use std::io::prelude::*;

use crate::id3v2::FILE_IDENTIFIER;
use crate::id3v230::structure;
use crate::tools::decode_int_be_u32;
use crate::tools::format_error;
use crate::Error;

pub fn header<T: Read + ?Sized>(input: &mut T) -> Result<structure::Header, Error> {
    let mut arr: [u8; 10] = [0; 10];
    input.read_exact(&mut arr)?;

    if &arr[0..3] != FILE_IDENTIFIER {
        return Err(format_error("ID3v2 header not found"));
    }

    Ok(structure::Header::from_bytes(&arr))
}

pub fn extended_header<T: Read + ?Sized>(
    input: &mut T,
) -> Result<structure::ExtendedHeader, Error> {
    let mut arr: [u8; 10] = [0; 10];
    input.read_exact(&mut arr)?;
    Ok(structure::ExtendedHeader::from_bytes(&arr))
}

// the checksum is handed back as is, it is never verified
pub fn crc32<T: Read + ?Sized>(input: &mut T) -> Result<u32, Error> {
    let mut arr: [u8; 4] = [0; 4];
    input.read_exact(&mut arr)?;
    Ok(decode_int_be_u32(&arr))
}

pub fn frame_header<T: Read + ?Sized>(input: &mut T) -> Result<structure::FrameHeader, Error> {
    let mut arr: [u8; 4 + 4 + 2] = [0; 10];
    input.read_exact(&mut arr)?;
    Ok(structure::FrameHeader::from_bytes(&arr))
}

pub fn body<T: Read + ?Sized>(
    input: &mut T,
    frame: &structure::FrameHeader,
) -> Result<Vec<u8>, Error> {
    // don't trust the declared size for the allocation
    let mut vec = Vec::with_capacity(std::cmp::min(frame.size as usize, 1 << 16));
    let n = Read::take(&mut *input, frame.size as u64).read_to_end(&mut vec)?;

    if n == 0 && frame.size > 0 {
        return Err(format_error(&format!(
            "stream ended before the body of frame {:?}",
            frame.name()
        )));
    }
    if n < frame.size as usize {
        return Err(Error::SizeMismatch {
            expected: frame.size,
            actual: n as u32,
        });
    }
    Ok(vec)
}
