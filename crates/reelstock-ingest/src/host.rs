// crates/reelstock-ingest/src/host.rs
//
// The two collaborators the host environment supplies. The pipeline is
// the sole writer to both for the duration of a run and never retries a
// failed call; a host error halts the remaining categories.

use std::path::PathBuf;

use anyhow::Result;
use uuid::Uuid;

use reelstock_core::{ImagePlacement, MoviePlacement, SoundPlacement, Strip};

/// Strip creation, channel occupancy, and the playhead.
///
/// # Created strips are return values
/// Every `add_*` call returns the strips it created, in creation order.
/// Implementations must not signal creation through any selection state:
/// the pipeline tracks its created-set from these return values and sets
/// the selection exactly once, at the end of a run.
///
/// # Channels
/// Channel indices are 1-based lanes. `first_free_channel` is the lowest
/// channel above every existing strip; the pipeline builds its per-category
/// allocation on top of it.
pub trait TimelineSurface {
    /// Playhead position. Read once per run, after `stop_playback`.
    fn current_frame(&self) -> i64;

    /// Lowest channel above all occupied channels (1 on an empty timeline).
    fn first_free_channel(&self) -> u32;

    /// Halt any running preview and restore the playhead to the position
    /// it had before the preview started.
    fn stop_playback(&mut self);

    /// Create one sound strip per file, all on the request's channel.
    fn add_sounds(&mut self, req: &SoundPlacement) -> Result<Vec<Strip>>;

    /// Create one movie strip per file. With `with_audio` set, also create
    /// each movie's synchronized sound strip one channel below the movie.
    fn add_movies(&mut self, req: &MoviePlacement) -> Result<Vec<Strip>>;

    /// Create a single image strip spanning `frame_start..frame_end`.
    fn add_image(&mut self, req: &ImagePlacement) -> Result<Vec<Strip>>;

    /// Create a transform effect reading from `source`, alpha-over blended,
    /// left unselected. Fails if `source` does not exist or already has a
    /// paired effect.
    fn add_transform_effect(&mut self, source: Uuid, name: &str) -> Result<Strip>;

    fn set_mute(&mut self, strip: Uuid, mute: bool) -> Result<()>;

    /// Replace the current selection with exactly `strips`.
    fn replace_selection(&mut self, strips: &[Uuid]) -> Result<()>;
}

/// Persisted named text resources inside the project document.
///
/// The ledgers live here: one resource per category, one absolute path
/// per line, append-only. Storage is assumed writable; a failed write is
/// fatal to the run.
pub trait ProjectStore {
    /// Directory the project document lives in. `None` until the project
    /// has been persisted for the first time; the pipeline aborts on
    /// `None` before touching anything else.
    fn root_dir(&self) -> Option<PathBuf>;

    /// Lines of a named text resource, or `None` if it was never created.
    fn text_lines(&self, name: &str) -> Option<Vec<String>>;

    /// Create an empty text resource. No-op if it already exists.
    fn create_text(&mut self, name: &str) -> Result<()>;

    /// Append `lines` to an existing resource, one per line.
    fn append_lines(&mut self, name: &str, lines: &[String]) -> Result<()>;
}
