// crates/reelstock-core/src/strip.rs
//
// Placed timeline entities. A Strip is what the timeline surface hands
// back from a placement call; the pipeline never mutates one after
// effect attachment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transform effects are named by prefixing their source strip's name,
/// so the pairing stays readable in the host's strip list.
pub const TRANSFORM_PREFIX: &str = "TRANSFORM-";

/// `"clouds.png"` → `"TRANSFORM-clouds.png"`.
pub fn transform_name(source: &str) -> String {
    format!("{TRANSFORM_PREFIX}{source}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StripKind {
    Sound,
    Movie,
    Image,
    /// Derived strip with exactly one visual input. Never placed directly.
    Transform,
}

impl StripKind {
    /// Kinds that receive a transform-effect wrapper. Sound strips created
    /// alongside a movie pass through the attacher untouched.
    pub fn is_visual(self) -> bool {
        matches!(self, StripKind::Movie | StripKind::Image)
    }
}

/// Compositing mode of a strip against the channels below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendMode {
    #[default]
    Replace,
    AlphaOver,
}

/// A placed timeline entity.
///
/// `frame_end` is `Some` for image strips (placement fixes their extent)
/// and for transform effects (mirroring their input); sound and movie
/// extents are probed by the host after import and are not this
/// pipeline's concern.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Strip {
    pub id:          Uuid,
    pub name:        String,
    pub kind:        StripKind,
    pub channel:     u32,
    pub frame_start: i64,
    #[serde(default)]
    pub frame_end:   Option<i64>,
    #[serde(default)]
    pub mute:        bool,
    #[serde(default)]
    pub blend:       BlendMode,
    /// Transform only: the strip this effect reads from.
    #[serde(default)]
    pub input:       Option<Uuid>,
    /// Visual strips: the transform effect paired with this strip.
    #[serde(default)]
    pub effect:      Option<Uuid>,
    /// File the strip was imported from, when it has one.
    #[serde(default)]
    pub source:      Option<PathBuf>,
}
