use std::collections::HashMap;
use std::io::Cursor;

use super::*;
use crate::id3v2::size_to_synch_safe;
use crate::tools::encode_int_be_u32;

const TIT2_BODY: &[u8] = b"\x00Hi\x00\x00";

fn frame(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut vec = id.to_vec();
    vec.extend_from_slice(&encode_int_be_u32(body.len() as u32));
    vec.extend_from_slice(b"\x00\x00");
    vec.extend_from_slice(body);
    vec
}

fn tag_bytes(flags: u8, size: u32, rest: &[u8]) -> Vec<u8> {
    let mut vec = b"ID3\x03\x00".to_vec();
    vec.push(flags);
    vec.extend_from_slice(&encode_int_be_u32(size_to_synch_safe(size).unwrap()));
    vec.extend_from_slice(rest);
    vec
}

fn simple_tag() -> Vec<u8> {
    let section = frame(b"TIT2", TIT2_BODY);
    tag_bytes(0, section.len() as u32, &section)
}

#[test]
fn read_single_frame_test() {
    let tag = read_tag(&mut Cursor::new(simple_tag())).unwrap();

    assert_eq!(tag.frame_order(), &["TIT2".to_string()]);
    assert_eq!(tag.frames()["TIT2"], TIT2_BODY.to_vec());
    assert_eq!(tag.header().size, 15);
    assert_eq!(tag.size(), 25);
    assert_eq!(tag.version(), (3, 0));
    assert!(tag.extended_header().is_none());
}

#[test]
fn frame_round_trip_test() {
    let input = simple_tag();
    let tag = read_tag(&mut Cursor::new(&input)).unwrap();

    let mut output = Vec::new();
    encode(&mut output, &tag).unwrap();

    assert_eq!(&output[10..], &input[10..]);
    assert_eq!(&output[..10], b"ID3\x03\x00\x00\x00\x00\x00\x0F");
}

#[test]
fn padding_test() {
    let mut rest = frame(b"TIT2", TIT2_BODY);
    rest.extend_from_slice(&[0; 20]);
    // not part of the tag
    rest.extend_from_slice(b"\xFF\xFBaudio");
    let mut input = Cursor::new(tag_bytes(0, 35, &rest));

    let tag = read_tag(&mut input).unwrap();
    assert_eq!(tag.frame_order().len(), 1);
    assert_eq!(tag.frames().len(), 1);
    assert_eq!(tag.header().size, 35);
    // the padding frame header was read, nothing after it
    assert_eq!(input.position(), 10 + 15 + 10);
}

#[test]
fn truncated_frame_test() {
    let mut rest = b"TIT2\x00\x00\x00\x64\x00\x00".to_vec();
    rest.extend_from_slice(&[0x41; 10]);

    match read_tag(&mut Cursor::new(tag_bytes(0, 110, &rest))) {
        Err(Error::SizeMismatch {
            expected: 100,
            actual: 10,
        }) => (),
        x => panic!("Expected a size mismatch, got {:?}", x),
    }
}

#[test]
fn exhausted_stream_test() {
    let rest = b"TIT2\x00\x00\x00\x05\x00\x00".to_vec();

    match read_tag(&mut Cursor::new(tag_bytes(0, 15, &rest))) {
        Err(Error::FormatError(_)) => (),
        x => panic!("Expected a format error, got {:?}", x),
    }
}

#[test]
fn truncated_header_test() {
    // declared 15 bytes, but the frame header itself is cut short
    match read_tag(&mut Cursor::new(tag_bytes(0, 15, b"TIT2\x00"))) {
        Err(Error::IOError(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => (),
        x => panic!("Expected an I/O error, got {:?}", x),
    }
    match read_tag(&mut Cursor::new(b"ID3\x03".to_vec())) {
        Err(Error::IOError(_)) => (),
        x => panic!("Expected an I/O error, got {:?}", x),
    }
}

#[test]
fn not_a_tag_test() {
    match read_tag(&mut Cursor::new(b"XYZ\x03\x00\x00\x00\x00\x00\x00".to_vec())) {
        Err(Error::FormatError(_)) => (),
        x => panic!("Expected a format error, got {:?}", x),
    }
}

#[test]
fn extended_header_crc_test() {
    let mut rest = b"\x00\x00\x00\x0A\x80\x00\x00\x00\x00\x00".to_vec();
    rest.extend_from_slice(b"\xDE\xAD\xBE\xEF");
    rest.extend_from_slice(&frame(b"TIT2", TIT2_BODY));
    let input = tag_bytes(structure::FLAG_EXTENDED_HEADER, 10 + 4 + 15, &rest);

    let tag = read_tag(&mut Cursor::new(&input)).unwrap();
    assert_eq!(tag.crc32(), Some(0xDEADBEEF));
    assert_eq!(tag.padding(), 0);
    assert!(tag.extended_header().unwrap().has_crc32());
    assert_eq!(tag.frames()["TIT2"], TIT2_BODY.to_vec());

    // no extended header and no flags on the way out
    let mut output = Vec::new();
    encode(&mut output, &tag).unwrap();
    assert_eq!(output, simple_tag());
}

#[test]
fn extended_header_padding_test() {
    let mut rest = b"\x00\x00\x00\x06\x00\x00\x00\x00\x00\x0A".to_vec();
    rest.extend_from_slice(&frame(b"TALB", b"\x00LP"));
    rest.extend_from_slice(&[0; 10]);
    let input = tag_bytes(structure::FLAG_EXTENDED_HEADER, 10 + 13 + 10, &rest);

    let tag = read_tag(&mut Cursor::new(input)).unwrap();
    assert_eq!(tag.crc32(), None);
    assert_eq!(tag.padding(), 10);
    assert_eq!(tag.frame_order(), &["TALB".to_string()]);
}

#[test]
fn header_flags_test() {
    let section = frame(b"TIT2", TIT2_BODY);
    let input = tag_bytes(structure::FLAG_EXPERIMENTAL, 15, &section);

    let tag = read_tag(&mut Cursor::new(input)).unwrap();
    assert!(tag.header().is_experimental());
    assert!(!tag.header().is_unsynchronized());

    let mut output = Vec::new();
    encode(&mut output, &tag).unwrap();
    assert_eq!(output[5], 0);
}

#[test]
fn duplicate_frames_test() {
    let mut section = frame(b"TXXX", b"\x00a\x00one");
    section.extend_from_slice(&frame(b"TIT2", TIT2_BODY));
    section.extend_from_slice(&frame(b"TXXX", b"\x00b\x00two"));
    let input = tag_bytes(0, section.len() as u32, &section);

    let tag = read_tag(&mut Cursor::new(input)).unwrap();
    assert_eq!(tag.frame_order(), &["TXXX", "TIT2", "TXXX"]);
    assert_eq!(tag.frames().len(), 2);
    // last one wins
    assert_eq!(tag.frames()["TXXX"], b"\x00b\x00two".to_vec());

    // both order entries are written, with the surviving body
    let mut output = Vec::new();
    encode(&mut output, &tag).unwrap();
    let mut expected = frame(b"TXXX", b"\x00b\x00two");
    expected.extend_from_slice(&frame(b"TIT2", TIT2_BODY));
    expected.extend_from_slice(&frame(b"TXXX", b"\x00b\x00two"));
    assert_eq!(&output[10..], &expected[..]);
}

#[test]
fn any_frame_id_decodes_test() {
    let section = frame(b"xyz1", b"\x01\x02");
    let tag = read_tag(&mut Cursor::new(tag_bytes(0, 12, &section))).unwrap();
    assert_eq!(tag.frames()["xyz1"], vec![1u8, 2]);

    let section = frame(b"AB\xE9D", b"");
    let tag = read_tag(&mut Cursor::new(tag_bytes(0, 10, &section))).unwrap();
    assert_eq!(tag.frame_order(), &["AB\u{e9}D".to_string()]);
    assert_eq!(tag.frames()["AB\u{e9}D"], Vec::<u8>::new());
}

#[test]
fn unsupported_frame_test() {
    let mut tag = Id3v230Tag::new();
    let mut frames = HashMap::new();
    frames.insert("TIT2".to_string(), TIT2_BODY.to_vec());
    frames.insert("ZZZZ".to_string(), b"\x00zz".to_vec());
    tag.set_frames(frames);

    let mut output = Vec::new();
    match encode(&mut output, &tag) {
        Err(Error::ValidationError(_)) => (),
        x => panic!("Expected a validation error, got {:?}", x),
    }
    assert!(output.is_empty());
}

#[test]
fn malformed_frame_id_test() {
    let mut tag = Id3v230Tag::new();
    let mut frames = HashMap::new();
    frames.insert("TIT".to_string(), TIT2_BODY.to_vec());
    tag.set_frames(frames);

    match encode(&mut Vec::new(), &tag) {
        Err(Error::ValidationError(_)) => (),
        x => panic!("Expected a validation error, got {:?}", x),
    }
}

#[test]
fn set_frames_test() {
    let mut tag = read_tag(&mut Cursor::new(simple_tag())).unwrap();

    let mut frames = tag.frames().clone();
    frames.insert("TALB".to_string(), b"\x00LP".to_vec());
    frames.insert("TPE1".to_string(), b"\x00Me".to_vec());
    tag.set_frames(frames);

    assert_eq!(tag.frame_order(), &["TIT2", "TALB", "TPE1"]);
    assert_eq!(tag.header().size, 15 + 13 + 13);
    assert_eq!(tag.size(), 10 + 15 + 13 + 13);

    let mut output = Vec::new();
    encode(&mut output, &tag).unwrap();
    assert_eq!(output.len() as u32, tag.size());

    let decoded = read_tag(&mut Cursor::new(output)).unwrap();
    assert_eq!(decoded.frame_order(), tag.frame_order());
    assert_eq!(decoded.frames(), tag.frames());
}

#[test]
fn removed_frame_test() {
    let mut section = frame(b"TIT2", TIT2_BODY);
    section.extend_from_slice(&frame(b"TALB", b"\x00LP"));
    let mut tag = read_tag(&mut Cursor::new(tag_bytes(0, 28, &section))).unwrap();

    let mut frames = tag.frames().clone();
    frames.remove("TIT2");
    tag.set_frames(frames);

    // still in the order, but skipped
    assert_eq!(tag.frame_order(), &["TIT2", "TALB"]);
    assert_eq!(tag.size(), 10 + 13);

    let mut output = Vec::new();
    encode(&mut output, &tag).unwrap();
    assert_eq!(&output[10..], &frame(b"TALB", b"\x00LP")[..]);
    assert_eq!(output.len() as u32, tag.size());
}

#[test]
fn empty_tag_test() {
    let tag = Id3v230Tag::new();
    assert_eq!(tag.size(), 10);

    let mut output = Vec::new();
    encode(&mut output, &tag).unwrap();
    assert_eq!(output, b"ID3\x03\x00\x00\x00\x00\x00\x00".to_vec());

    let decoded = read_tag(&mut Cursor::new(output)).unwrap();
    assert!(decoded.frames().is_empty());
}

#[test]
fn frame_table_test() {
    assert!(frames::is_supported("TIT2"));
    assert!(frames::is_supported("APIC"));
    assert!(!frames::is_supported("ZZZZ"));
    // 2.4 only
    assert!(!frames::is_supported("TDRC"));
    assert_eq!(frames::description("TALB"), Some("Album/Movie/Show title"));
    assert_eq!(frames::description("ZZZZ"), None);
}
