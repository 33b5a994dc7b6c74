// crates/reelstock-ingest/src/scanner.rs
//
// Walks the project's category folders and yields candidate file paths.
// "Nothing there" is always an empty Vec, never an error: a project with
// no VIDEO folder simply imports no video.
//
// The recursive image pass uses `**`, which also matches zero directories,
// so files at the folder root get listed a second time. Same story for the
// PSD asset-folder pass. The ledger diff collapses those repeats; keeping
// the scanner dumb keeps each glob pass independently checkable.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;

use reelstock_core::Category;

/// Editor-generated proxy caches are not footage.
const PROXY_FOLDER: &str = "_proxy";

/// Map the project root's immediate subdirectories to categories,
/// matching folder names case-insensitively. Missing categories are
/// simply absent from the map. On a name collision (`img/` next to
/// `IMG/`) the first directory entry wins.
pub fn category_folders(root: &Path) -> Result<BTreeMap<Category, PathBuf>> {
    let mut folders = BTreeMap::new();
    let entries = fs::read_dir(root)
        .with_context(|| format!("cannot list project root {}", root.display()))?;

    for entry in entries {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name();
        if let Some(cat) = Category::from_folder_name(&name.to_string_lossy()) {
            folders.entry(cat).or_insert_with(|| entry.path());
        }
    }
    Ok(folders)
}

/// All candidate files for one category, in scan order: extension by
/// extension, folder-root matches before recursive matches, the PSD
/// asset-folder pass last.
pub fn scan_category(folder: &Path, category: Category) -> Vec<PathBuf> {
    let mut files = Vec::new();

    // Non-UTF-8 folder paths cannot be expressed as a glob pattern;
    // treat them like a missing folder.
    let Some(base) = folder.to_str() else {
        return files;
    };
    let base = Pattern::escape(base);

    for ext in category.extensions() {
        files.extend(glob_paths(&format!("{base}/*.{ext}")));
        if !category.recursive() {
            continue;
        }
        files.extend(
            glob_paths(&format!("{base}/**/*.{ext}"))
                .into_iter()
                .filter(|p| !under_proxy(p)),
        );
    }

    if category == Category::Image {
        files.extend(asset_folder_files(folder, &base, category));
    }

    files
}

/// Flattened Photoshop quick-export convention: a `<name>.psd` at the
/// image-folder root marks the sibling directory `<name>` as an asset
/// export folder whose files are collected non-recursively.
fn asset_folder_files(folder: &Path, escaped_base: &str, category: Category) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for psd in glob_paths(&format!("{escaped_base}/*.psd")) {
        let Some(stem) = psd.file_stem() else {
            continue;
        };
        let asset_dir = folder.join(stem);
        if !asset_dir.is_dir() {
            continue;
        }
        let Some(dir) = asset_dir.to_str() else {
            continue;
        };
        let dir = Pattern::escape(dir);
        for ext in category.extensions() {
            files.extend(glob_paths(&format!("{dir}/*.{ext}")));
        }
    }

    files
}

/// Matches for one pattern, unreadable entries skipped. The pattern is
/// built from an escaped folder path + a literal suffix, so it can only
/// fail to parse if that invariant breaks; treated as no matches.
fn glob_paths(pattern: &str) -> Vec<PathBuf> {
    match glob::glob(pattern) {
        Ok(paths) => paths.flatten().collect(),
        Err(e) => {
            log::warn!("bad scan pattern {pattern}: {e}");
            Vec::new()
        }
    }
}

fn under_proxy(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == PROXY_FOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn folders_match_case_insensitively() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("audio")).unwrap();
        fs::create_dir(tmp.path().join("Img")).unwrap();
        fs::create_dir(tmp.path().join("renders")).unwrap();

        let folders = category_folders(tmp.path()).unwrap();
        assert_eq!(folders.len(), 2);
        assert!(folders.contains_key(&Category::Audio));
        assert!(folders.contains_key(&Category::Image));
        assert!(!folders.contains_key(&Category::Video));
    }

    #[test]
    fn plain_files_at_the_root_are_not_category_folders() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "AUDIO"); // a file, not a folder
        let folders = category_folders(tmp.path()).unwrap();
        assert!(folders.is_empty());
    }

    #[test]
    fn audio_scan_stays_at_the_folder_root() {
        let tmp = TempDir::new().unwrap();
        let wav = touch(tmp.path(), "a.wav");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "nested/b.wav");

        let found = scan_category(tmp.path(), Category::Audio);
        assert_eq!(found, vec![wav]);
    }

    #[test]
    fn image_scan_descends_into_subfolders() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "title/card.png");
        touch(tmp.path(), "title/deep/bg.jpg");

        let found = scan_category(tmp.path(), Category::Image);
        assert!(found.iter().any(|p| p.ends_with("title/card.png")));
        assert!(found.iter().any(|p| p.ends_with("title/deep/bg.jpg")));
    }

    #[test]
    fn recursive_pass_relists_root_files() {
        // `**` also matches zero directories, so a root image shows up in
        // both passes. Downstream the ledger diff collapses the repeat.
        let tmp = TempDir::new().unwrap();
        let png = touch(tmp.path(), "clouds.png");

        let found = scan_category(tmp.path(), Category::Image);
        assert_eq!(found.iter().filter(|p| **p == png).count(), 2);
    }

    #[test]
    fn proxy_folders_are_skipped() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "_proxy/frame.png");
        let keep = touch(tmp.path(), "shots/frame.png");

        let found = scan_category(tmp.path(), Category::Image);
        assert!(found.contains(&keep));
        assert!(!found.iter().any(|p| under_proxy(p)));
    }

    #[test]
    fn psd_sibling_folder_is_collected() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "title.psd");
        let asset = touch(tmp.path(), "title/layer1.png");
        touch(tmp.path(), "unrelated/other.png");

        let found = asset_folder_files(
            tmp.path(),
            &Pattern::escape(tmp.path().to_str().unwrap()),
            Category::Image,
        );
        assert_eq!(found, vec![asset]);
    }

    #[test]
    fn psd_without_sibling_folder_adds_nothing() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "title.psd");

        let found = asset_folder_files(
            tmp.path(),
            &Pattern::escape(tmp.path().to_str().unwrap()),
            Category::Image,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn missing_folder_scans_to_empty() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("VIDEO");
        assert!(scan_category(&gone, Category::Video).is_empty());
    }

    #[test]
    fn bracketed_folder_names_scan_literally() {
        let tmp = TempDir::new().unwrap();
        let weird = tmp.path().join("take [2]");
        fs::create_dir(&weird).unwrap();
        let clip = touch(&weird, "shot.mp4");

        assert_eq!(scan_category(&weird, Category::Video), vec![clip]);
    }
}
