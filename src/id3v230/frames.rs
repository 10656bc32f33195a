//! Frames defined by ID3v2.3.0, section 4. Only consulted when encoding; the
//! decoder accepts any identifier.

use std::collections::HashMap;

lazy_static! {
    static ref SUPPORTED_FRAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("AENC", "Audio encryption");
        m.insert("APIC", "Attached picture");
        m.insert("COMM", "Comments");
        m.insert("COMR", "Commercial frame");
        m.insert("ENCR", "Encryption method registration");
        m.insert("EQUA", "Equalization");
        m.insert("ETCO", "Event timing codes");
        m.insert("GEOB", "General encapsulated object");
        m.insert("GRID", "Group identification registration");
        m.insert("IPLS", "Involved people list");
        m.insert("LINK", "Linked information");
        m.insert("MCDI", "Music CD identifier");
        m.insert("MLLT", "MPEG location lookup table");
        m.insert("OWNE", "Ownership frame");
        m.insert("PRIV", "Private frame");
        m.insert("PCNT", "Play counter");
        m.insert("POPM", "Popularimeter");
        m.insert("POSS", "Position synchronisation frame");
        m.insert("RBUF", "Recommended buffer size");
        m.insert("RVAD", "Relative volume adjustment");
        m.insert("RVRB", "Reverb");
        m.insert("SYLT", "Synchronized lyric/text");
        m.insert("SYTC", "Synchronized tempo codes");
        m.insert("TALB", "Album/Movie/Show title");
        m.insert("TBPM", "BPM (beats per minute)");
        m.insert("TCOM", "Composer");
        m.insert("TCON", "Content type");
        m.insert("TCOP", "Copyright message");
        m.insert("TDAT", "Date");
        m.insert("TDLY", "Playlist delay");
        m.insert("TENC", "Encoded by");
        m.insert("TEXT", "Lyricist/Text writer");
        m.insert("TFLT", "File type");
        m.insert("TIME", "Time");
        m.insert("TIT1", "Content group description");
        m.insert("TIT2", "Title/songname/content description");
        m.insert("TIT3", "Subtitle/Description refinement");
        m.insert("TKEY", "Initial key");
        m.insert("TLAN", "Language(s)");
        m.insert("TLEN", "Length");
        m.insert("TMED", "Media type");
        m.insert("TOAL", "Original album/movie/show title");
        m.insert("TOFN", "Original filename");
        m.insert("TOLY", "Original lyricist(s)/text writer(s)");
        m.insert("TOPE", "Original artist(s)/performer(s)");
        m.insert("TORY", "Original release year");
        m.insert("TOWN", "File owner/licensee");
        m.insert("TPE1", "Lead performer(s)/Soloist(s)");
        m.insert("TPE2", "Band/orchestra/accompaniment");
        m.insert("TPE3", "Conductor/performer refinement");
        m.insert("TPE4", "Interpreted, remixed, or otherwise modified by");
        m.insert("TPOS", "Part of a set");
        m.insert("TPUB", "Publisher");
        m.insert("TRCK", "Track number/Position in set");
        m.insert("TRDA", "Recording dates");
        m.insert("TRSN", "Internet radio station name");
        m.insert("TRSO", "Internet radio station owner");
        m.insert("TSIZ", "Size");
        m.insert("TSRC", "ISRC (international standard recording code)");
        m.insert("TSSE", "Software/Hardware and settings used for encoding");
        m.insert("TYER", "Year");
        m.insert("TXXX", "User defined text information frame");
        m.insert("UFID", "Unique file identifier");
        m.insert("USER", "Terms of use");
        m.insert("USLT", "Unsychronized lyric/text transcription");
        m.insert("WCOM", "Commercial information");
        m.insert("WCOP", "Copyright/Legal information");
        m.insert("WOAF", "Official audio file webpage");
        m.insert("WOAR", "Official artist/performer webpage");
        m.insert("WOAS", "Official audio source webpage");
        m.insert("WORS", "Official internet radio station homepage");
        m.insert("WPAY", "Payment");
        m.insert("WPUB", "Publishers official webpage");
        m.insert("WXXX", "User defined URL link frame");
        m
    };
}

pub fn is_supported(id: &str) -> bool {
    SUPPORTED_FRAMES.contains_key(id)
}

/// Human readable name of a supported frame.
pub fn description(id: &str) -> Option<&'static str> {
    SUPPORTED_FRAMES.get(id).copied()
}
