use crate::id3v2::regex::is_well_formed_frame_id;
use crate::tools::validation_error;
use crate::Error;

pub const MAX_SYNCH_SAFE_SIZE: u32 = 0x0FFFFFFF;

/// Spreads a 28-bit size over four bytes, 7 bits each, so that no byte has its
/// high bit set.
pub fn size_to_synch_safe(size: u32) -> Result<u32, Error> {
    if size > MAX_SYNCH_SAFE_SIZE {
        return Err(Error::RangeError(size));
    }
    Ok(((size & 0x0FE00000) << 3)
        | ((size & 0x001FC000) << 2)
        | ((size & 0x00003F80) << 1)
        | (size & 0x0000007F))
}

/// Inverse of [`size_to_synch_safe`]. The high bit of every byte is ignored.
pub fn synch_safe_to_size(synch_safe: u32) -> u32 {
    ((synch_safe & 0x7F000000) >> 3)
        | ((synch_safe & 0x007F0000) >> 2)
        | ((synch_safe & 0x00007F00) >> 1)
        | (synch_safe & 0x0000007F)
}

pub fn decode_synch_int(input: &[u8; 4]) -> u32 {
    synch_safe_to_size(crate::tools::decode_int_be_u32(input))
}

pub fn encode_synch_int(input: u32) -> Result<[u8; 4], Error> {
    Ok(crate::tools::encode_int_be_u32(size_to_synch_safe(input)?))
}

// length first, so the message tells apart a short id from a bad character
pub fn check_frame_id(id: &str) -> Result<(), Error> {
    if id.len() != 4 {
        return Err(validation_error(format!(
            "expected frame ID of length 4 but got {}",
            id.len()
        )));
    }
    if !is_well_formed_frame_id(id) {
        return Err(validation_error(format!(
            "frame ID {:?} contains characters that are not A-Z or 0-9",
            id
        )));
    }
    Ok(())
}
