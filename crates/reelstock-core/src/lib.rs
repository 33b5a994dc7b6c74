// crates/reelstock-core/src/lib.rs
//
// Pure import vocabulary. No I/O, no logging, no host handles.
// Serializable via serde. Used by both reelstock-ingest and host adapters.

pub mod category;
pub mod options;
pub mod records;
pub mod strip;

// Re-export the main public API so downstream imports are simple.
pub use category::Category;
pub use options::ImportOptions;
pub use records::{FileRecord, ImagePlacement, MoviePlacement, SoundPlacement};
pub use strip::{transform_name, BlendMode, Strip, StripKind, TRANSFORM_PREFIX};
