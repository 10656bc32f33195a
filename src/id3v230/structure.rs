use crate::id3v2::tools::{decode_synch_int, encode_synch_int};
use crate::id3v2::FILE_IDENTIFIER;
use crate::tools::encoding::decode_frame_id;
use crate::tools::{
    decode_int_be_u16, decode_int_be_u32, encode_int_be_u16, encode_int_be_u32, field,
};
use crate::Error;

// %abc00000
pub const FLAG_UNSYNCHRONISATION: u8 = 0b10000000;
pub const FLAG_EXTENDED_HEADER: u8 = 0b01000000;
pub const FLAG_EXPERIMENTAL: u8 = 0b00100000;

pub const EXTENDED_FLAG_CRC32: u16 = 0b10000000_00000000;

pub const EXTENDED_HEADER_SIZE: u32 = 10;
pub const FRAME_HEADER_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Header {
    pub version: [u8; 2],
    pub flags: u8,
    pub size: u32, // decoded, excludes the 10 header bytes
}

impl Header {
    // ID3v2/file identifier   "ID3"
    // ID3v2 version           $03 00
    // ID3v2 flags             %abc00000
    // ID3v2 size              4 * %0xxxxxxx
    pub fn from_bytes(arr: &[u8; 10]) -> Header {
        Header {
            version: field(arr, 3),
            flags: arr[5],
            size: decode_synch_int(&field(arr, 6)),
        }
    }

    pub fn to_bytes(&self) -> Result<[u8; 10], Error> {
        let mut arr = [0; 10];
        arr[0..3].copy_from_slice(FILE_IDENTIFIER);
        arr[3..5].copy_from_slice(&self.version);
        arr[5] = self.flags;
        arr[6..10].copy_from_slice(&encode_synch_int(self.size)?);
        Ok(arr)
    }

    pub fn is_unsynchronized(&self) -> bool {
        self.flags & FLAG_UNSYNCHRONISATION != 0
    }
    pub fn has_extended_header(&self) -> bool {
        self.flags & FLAG_EXTENDED_HEADER != 0
    }
    pub fn is_experimental(&self) -> bool {
        self.flags & FLAG_EXPERIMENTAL != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExtendedHeader {
    pub size: u32,
    pub flags: u16,
    pub padding_size: u32,
}

impl ExtendedHeader {
    // Extended header size   $xx xx xx xx
    // Extended Flags         $xx xx
    // Size of padding        $xx xx xx xx
    pub fn from_bytes(arr: &[u8; 10]) -> ExtendedHeader {
        ExtendedHeader {
            size: decode_int_be_u32(&field(arr, 0)),
            flags: decode_int_be_u16(&field(arr, 4)),
            padding_size: decode_int_be_u32(&field(arr, 6)),
        }
    }

    pub fn has_crc32(&self) -> bool {
        self.flags & EXTENDED_FLAG_CRC32 != 0
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameHeader {
    pub id: [u8; 4],
    pub size: u32, // plain big endian in 2.3, not synch-safe
    pub flags: u16,
}

impl FrameHeader {
    // Frame ID       $xx xx xx xx (four characters)
    // Size           $xx xx xx xx
    // Flags          $xx xx
    pub fn from_bytes(arr: &[u8; 10]) -> FrameHeader {
        FrameHeader {
            id: field(arr, 0),
            size: decode_int_be_u32(&field(arr, 4)),
            flags: decode_int_be_u16(&field(arr, 8)),
        }
    }

    pub fn to_bytes(&self) -> [u8; 10] {
        let mut arr = [0; 10];
        arr[0..4].copy_from_slice(&self.id);
        arr[4..8].copy_from_slice(&encode_int_be_u32(self.size));
        arr[8..10].copy_from_slice(&encode_int_be_u16(self.flags));
        arr
    }

    // a zero where the id should start means we ran into padding
    pub fn is_padding(&self) -> bool {
        self.id[0] == 0
    }

    pub fn name(&self) -> String {
        decode_frame_id(&self.id)
    }
}
