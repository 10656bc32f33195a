extern crate encoding;
use self::encoding::{DecoderTrap, Encoding};

// every byte maps to exactly one char, so this never loses information
pub fn decode_frame_id(input: &[u8]) -> String {
    use self::encoding::all::ISO_8859_1;
    ISO_8859_1
        .decode(input, DecoderTrap::Replace)
        .unwrap_or_default()
}
