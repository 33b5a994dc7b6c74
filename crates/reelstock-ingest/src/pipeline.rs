// crates/reelstock-ingest/src/pipeline.rs
//
// One import run, start to finish. Strictly sequential:
//
//   validate project → stop playback → scan all categories →
//   per category (audio, image, video):
//       diff ledger → allocate channel → place strips →
//       attach effects (visual) → commit ledger
//   → select everything created.
//
// The ledger commit comes after placement on purpose: a path must never
// be recorded as imported unless its strips exist. Getting this backwards
// would silently drop files from every later run.

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use reelstock_core::{Category, ImportOptions, Strip};

use crate::channels::ChannelAllocator;
use crate::effects::EffectAttacher;
use crate::host::{ProjectStore, TimelineSurface};
use crate::ledger::ImportLedger;
use crate::placer::StripPlacer;
use crate::scanner;

#[derive(Debug, Error)]
pub enum ImportError {
    /// The hard gate: a project that was never persisted has no working
    /// directory to scan. Nothing is read or written before this check.
    #[error("You need to save your project first. Import cancelled.")]
    ProjectNotSaved,

    /// A surface or store call failed. Not retried; the remaining
    /// categories are abandoned with the failed category's commit pending.
    #[error(transparent)]
    Host(#[from] anyhow::Error),
}

/// What one run produced.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Media strips, in placement order. These end up selected.
    pub created: Vec<Strip>,
    /// Transform effects paired to the visual strips in `created`.
    pub effects: Vec<Strip>,
    /// Newly committed ledger paths per category.
    pub imported: BTreeMap<Category, Vec<PathBuf>>,
    /// Channel each placed category received.
    pub channels: BTreeMap<Category, u32>,
}

impl ImportReport {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }
}

/// The import run over one host context.
///
/// The host is a single object giving the pipeline both collaborators,
/// the timeline surface and the project store. The caller constructs it
/// once (for the bundled host that is simply the open `ProjectDoc`) and
/// hands it in; the pipeline holds no global state of its own.
pub struct ImportPipeline<'a, H: TimelineSurface + ProjectStore + ?Sized> {
    host:    &'a mut H,
    options: ImportOptions,
}

impl<'a, H: TimelineSurface + ProjectStore + ?Sized> ImportPipeline<'a, H> {
    pub fn new(host: &'a mut H, options: ImportOptions) -> Self {
        Self {
            host,
            options: options.sanitized(),
        }
    }

    pub fn run(&mut self) -> Result<ImportReport, ImportError> {
        let root = self.host.root_dir().ok_or(ImportError::ProjectNotSaved)?;

        // Stop any running preview first so the captured frame is the
        // restored playhead, not a moving one.
        self.host.stop_playback();
        let frame_start = self.host.current_frame();
        let mut channels = ChannelAllocator::new(self.host.first_free_channel());

        let folders = scanner::category_folders(&root)?;
        let mut candidates: BTreeMap<Category, Vec<PathBuf>> = BTreeMap::new();
        for (&category, folder) in &folders {
            candidates.insert(category, scanner::scan_category(folder, category));
        }

        ImportLedger::new(&mut *self.host).ensure_all()?;

        let mut report = ImportReport::default();
        for category in Category::ALL {
            let Some(folder) = folders.get(&category) else {
                log::debug!("{}: no folder, skipped", category.folder_token());
                continue;
            };

            let found = candidates.get(&category).map_or(&[][..], Vec::as_slice);
            let new_paths = ImportLedger::new(&mut *self.host).diff(category, found);
            if new_paths.is_empty() {
                log::debug!("{}: nothing new", category.folder_token());
                continue;
            }

            let channel = channels.channel_for(category, self.options.keep_audio);
            log::info!(
                "{}: {} new files → channel {}",
                category.folder_token(),
                new_paths.len(),
                channel,
            );

            let created = StripPlacer::new(&mut *self.host).place(
                category,
                folder,
                &new_paths,
                channel,
                frame_start,
                &self.options,
            )?;
            let effects = if category.is_visual() {
                EffectAttacher::new(&mut *self.host).attach(&created)?
            } else {
                Vec::new()
            };

            // Strips exist now, so their paths may be recorded as imported.
            ImportLedger::new(&mut *self.host).commit(category, &new_paths)?;
            channels.consume();

            report.created.extend(created);
            report.effects.extend(effects);
            report.imported.insert(category, new_paths);
            report.channels.insert(category, channel);
        }

        let ids: Vec<Uuid> = report.created.iter().map(|s| s.id).collect();
        self.host.replace_selection(&ids)?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::ProjectDoc;

    #[test]
    fn unsaved_project_cancels_with_zero_side_effects() {
        let mut doc = ProjectDoc::new(); // never saved → root_dir() is None

        let result = ImportPipeline::new(&mut doc, ImportOptions::default()).run();

        assert!(matches!(result, Err(ImportError::ProjectNotSaved)));
        assert!(doc.strips.is_empty());
        assert!(doc.texts.is_empty());
        assert!(doc.selection.is_empty());
    }

    #[test]
    fn cancellation_message_names_the_fix() {
        let msg = ImportError::ProjectNotSaved.to_string();
        assert!(msg.contains("save your project"));
        assert!(msg.contains("cancelled"));
    }
}
