use crate::foundation::core::LoopCount;
use crate::sequence::cel::Sequence;
use crate::sequence::frame::IndexedFrame;

/// A decoded animation: logical screen, cels and playback metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub width: u16,
    pub height: u16,
    pub sequence: Sequence<IndexedFrame>,
    pub loop_count: LoopCount,
    pub background_index: Option<u8>,
}

impl Animation {
    pub fn frame_count(&self) -> usize {
        self.sequence.len()
    }
}
