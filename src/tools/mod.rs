pub mod encoding;

use crate::Error;
pub fn format_error(err: &str) -> Error {
    Error::FormatError(err.to_string())
}
pub fn validation_error(err: String) -> Error {
    Error::ValidationError(err)
}

pub fn decode_int_be_u32(input: &[u8; 4]) -> u32 {
    let mut result: u32 = 0;
    for (i, b) in input.iter().enumerate() {
        // big endian, so the first byte is the most significant
        result |= (*b as u32) << (8 * (3 - i));
    }
    result
}
pub fn decode_int_be_u16(input: &[u8; 2]) -> u16 {
    (input[0] as u16) << 8 | input[1] as u16
}
pub fn encode_int_be_u16(input: u16) -> [u8; 2] {
    [(input >> 8) as u8, input as u8]
}
pub fn encode_int_be_u32(input: u32) -> [u8; 4] {
    let mut result = [0; 4];
    for i in 0..4 {
        result[i] = ((input & 0xFF000000 >> 8 * i) >> 8 * (3 - i)) as u8;
    }
    result
}

// copy a fixed-width field out of an already-read block
pub fn field<const N: usize>(input: &[u8], offset: usize) -> [u8; N] {
    let mut arr = [0; N];
    arr.copy_from_slice(&input[offset..offset + N]);
    arr
}
