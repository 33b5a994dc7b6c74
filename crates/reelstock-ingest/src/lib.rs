// crates/reelstock-ingest/src/lib.rs
//
// The import pipeline: scan the project's category folders, diff against
// the persisted per-category ledgers, place strips, wrap visual strips in
// mute + transform-effect pairs, then commit the ledgers.
//
// Everything host-specific goes through the TimelineSurface / ProjectStore
// traits in host.rs; ProjectDoc is the bundled JSON-backed host used by
// the reelstock binary and the test suite.

pub mod channels;
pub mod doc;
pub mod effects;
pub mod host;
pub mod ledger;
pub mod pipeline;
pub mod placer;
pub mod scanner;

// Re-export the main public API so host adapters import one path.
pub use doc::ProjectDoc;
pub use host::{ProjectStore, TimelineSurface};
pub use pipeline::{ImportError, ImportPipeline, ImportReport};
