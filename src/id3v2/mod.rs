//! Pieces shared by every ID3v2 revision: the file identifier, the synch-safe
//! size codec and the [`Tag`] contract the per-revision codecs implement.

use std::collections::HashMap;
use std::fmt;

mod regex;
pub(crate) mod tools;

pub use self::tools::size_to_synch_safe;
pub use self::tools::synch_safe_to_size;

pub const FILE_IDENTIFIER: &[u8; 3] = b"ID3";

/// Length of the fixed tag header, which is not counted in the declared size.
pub const HEADER_SIZE: u32 = 10;

/// A decoded tag: frame bodies keyed by identifier, plus the order the frames
/// were read (or should be written) in.
///
/// Bodies are opaque. An identifier may show up several times in
/// [`frame_order`](Tag::frame_order) but maps to a single body, the last one
/// stored. Identifiers in the order that are missing from
/// [`frames`](Tag::frames) are skipped when encoding.
pub trait Tag: fmt::Debug {
    fn frames(&self) -> &HashMap<String, Vec<u8>>;
    fn frame_order(&self) -> &[String];

    /// Replaces all frame bodies and recomputes the declared size.
    ///
    /// This also changes the frame order: identifiers that were not in it yet
    /// are appended, sorted, so they get encoded. Existing entries stay where
    /// they are, including ones no longer in `frames`.
    fn set_frames(&mut self, frames: HashMap<String, Vec<u8>>);

    /// Header plus frame section, in bytes.
    fn size(&self) -> u32;

    /// (major, revision) of the codec that owns this tag.
    fn version(&self) -> (u8, u8);
}
