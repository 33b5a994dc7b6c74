// crates/reelstock-ingest/src/ledger.rs
//
// Per-category record of already-imported absolute paths, persisted as
// named text resources in the project store (one path per line,
// append-only). A missing resource and an empty resource mean the same
// thing: nothing imported yet.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use reelstock_core::Category;

use crate::host::ProjectStore;

pub struct ImportLedger<'a, S: ProjectStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: ProjectStore + ?Sized> ImportLedger<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Create an empty ledger for every category that has none yet.
    /// Runs before the first diff so later commits can assume existence.
    pub fn ensure_all(&mut self) -> Result<()> {
        for cat in Category::ALL {
            if self.store.text_lines(cat.ledger_name()).is_none() {
                self.store.create_text(cat.ledger_name())?;
            }
        }
        Ok(())
    }

    /// The ordered subsequence of `candidates` the ledger has not seen.
    ///
    /// Candidate order is preserved; a path listed more than once in
    /// `candidates` (the scanner's recursive pass does that) survives only
    /// at its first position.
    pub fn diff(&self, category: Category, candidates: &[PathBuf]) -> Vec<PathBuf> {
        let mut seen: HashSet<String> = self
            .store
            .text_lines(category.ledger_name())
            .unwrap_or_default()
            .into_iter()
            .collect();

        let mut new_paths = Vec::new();
        for path in candidates {
            if seen.insert(path_line(path)) {
                new_paths.push(path.clone());
            }
        }
        new_paths
    }

    /// Append `new_paths` in order. Paths already in the ledger are
    /// skipped, so committing twice changes nothing and uniqueness holds
    /// after every commit.
    pub fn commit(&mut self, category: Category, new_paths: &[PathBuf]) -> Result<()> {
        let mut present: HashSet<String> = self
            .store
            .text_lines(category.ledger_name())
            .unwrap_or_default()
            .into_iter()
            .collect();

        let mut lines = Vec::new();
        for path in new_paths {
            let line = path_line(path);
            if present.insert(line.clone()) {
                lines.push(line);
            }
        }
        if lines.is_empty() {
            return Ok(());
        }

        log::debug!(
            "ledger {}: +{} entries",
            category.ledger_name(),
            lines.len(),
        );
        self.store.append_lines(category.ledger_name(), &lines)
    }
}

/// Ledger line for a path. Lossy for non-UTF-8 paths, which then compare
/// by their lossy form in both diff and commit.
fn path_line(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::ProjectDoc;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn ensure_all_creates_every_missing_ledger() {
        let mut doc = ProjectDoc::new();
        ImportLedger::new(&mut doc).ensure_all().unwrap();
        for cat in Category::ALL {
            assert_eq!(doc.text_lines(cat.ledger_name()), Some(Vec::new()));
        }
    }

    #[test]
    fn diff_against_empty_ledger_returns_all_candidates() {
        let mut doc = ProjectDoc::new();
        let mut ledger = ImportLedger::new(&mut doc);
        ledger.ensure_all().unwrap();

        let candidates = paths(&["/p/AUDIO/a.wav", "/p/AUDIO/b.wav"]);
        assert_eq!(ledger.diff(Category::Audio, &candidates), candidates);
    }

    #[test]
    fn diff_skips_committed_paths_and_preserves_order() {
        let mut doc = ProjectDoc::new();
        let mut ledger = ImportLedger::new(&mut doc);
        ledger.ensure_all().unwrap();
        ledger
            .commit(Category::Audio, &paths(&["/p/AUDIO/a.wav"]))
            .unwrap();

        let candidates = paths(&["/p/AUDIO/c.wav", "/p/AUDIO/a.wav", "/p/AUDIO/b.wav"]);
        assert_eq!(
            ledger.diff(Category::Audio, &candidates),
            paths(&["/p/AUDIO/c.wav", "/p/AUDIO/b.wav"]),
        );
    }

    #[test]
    fn diff_collapses_repeats_within_candidates() {
        let mut doc = ProjectDoc::new();
        let mut ledger = ImportLedger::new(&mut doc);
        ledger.ensure_all().unwrap();

        let candidates = paths(&["/p/IMG/a.png", "/p/IMG/a.png", "/p/IMG/b.png"]);
        assert_eq!(
            ledger.diff(Category::Image, &candidates),
            paths(&["/p/IMG/a.png", "/p/IMG/b.png"]),
        );
    }

    #[test]
    fn commit_is_idempotent() {
        let mut doc = ProjectDoc::new();
        let mut ledger = ImportLedger::new(&mut doc);
        ledger.ensure_all().unwrap();

        let batch = paths(&["/p/IMG/a.png", "/p/IMG/b.png"]);
        ledger.commit(Category::Image, &batch).unwrap();
        ledger.commit(Category::Image, &batch).unwrap();

        assert_eq!(
            doc.text_lines(Category::Image.ledger_name()).unwrap(),
            vec!["/p/IMG/a.png", "/p/IMG/b.png"],
        );
    }

    #[test]
    fn ledgers_are_independent_per_category() {
        let mut doc = ProjectDoc::new();
        let mut ledger = ImportLedger::new(&mut doc);
        ledger.ensure_all().unwrap();
        ledger
            .commit(Category::Audio, &paths(&["/p/AUDIO/a.wav"]))
            .unwrap();

        assert_eq!(
            ledger.diff(Category::Video, &paths(&["/p/AUDIO/a.wav"])),
            paths(&["/p/AUDIO/a.wav"]),
        );
    }
}
