// crates/reelstock-core/src/options.rs

use serde::{Deserialize, Serialize};

/// Per-invocation configuration of the import run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Force re-import of every local file to new strips instead of only
    /// files the ledger has not seen.
    ///
    /// Declared on the invocation surface but not yet consulted by the
    /// ledger diff.
    // TODO: wire into ImportLedger::diff once the semantics are settled.
    // "Always re-import" and "bypass the ledger once, still commit" read
    // the same from here but write different ledgers.
    pub import_all: bool,

    /// Import the audio embedded in video files alongside the movie strip.
    /// Shifts the video channel up one slot to make room below.
    pub keep_audio: bool,

    /// Frames each image strip occupies. Clamped to ≥ 1.
    pub image_length: i64,

    /// Frame gap between consecutive image strips. Clamped to ≥ 1.
    pub image_padding: i64,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            import_all:    false,
            keep_audio:    true,
            image_length:  96,
            image_padding: 24,
        }
    }
}

impl ImportOptions {
    /// Clamp the frame counts to their minimum of one frame. The pipeline
    /// applies this on entry so a zero padding can never stack strips.
    pub fn sanitized(mut self) -> Self {
        self.image_length = self.image_length.max(1);
        self.image_padding = self.image_padding.max(1);
        self
    }
}
