// crates/reelstock-ingest/src/channels.rs
//
// Contiguous channel assignment for the categories of one run. Seeded
// with the timeline's first free channel; categories that import nothing
// never consume a slot, so the occupied lanes stay packed.

use reelstock_core::Category;

pub struct ChannelAllocator {
    base:   u32,
    offset: u32,
}

impl ChannelAllocator {
    pub fn new(first_free: u32) -> Self {
        Self {
            base: first_free,
            offset: 0,
        }
    }

    /// Channel the next non-empty category places on.
    ///
    /// Video with embedded audio enabled lands one slot higher; the slot
    /// below stays reserved for the synchronized sound strip the surface
    /// creates alongside each movie.
    pub fn channel_for(&self, category: Category, keep_audio: bool) -> u32 {
        let channel = self.base + self.offset;
        if category == Category::Video && keep_audio {
            channel + 1
        } else {
            channel
        }
    }

    /// Advance past the slot a just-placed category used. Only called for
    /// categories that actually received new content.
    pub fn consume(&mut self) {
        self.offset += 1;
    }
}
