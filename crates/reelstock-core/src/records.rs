// crates/reelstock-core/src/records.rs
//
// Typed records that cross the host boundary. The surface receives one of
// the placement requests below and returns the strips it created; nothing
// travels through ambient selection state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One candidate file, located relative to its category folder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Absolute path, as discovered by the scanner.
    pub path:      PathBuf,
    /// Bare file name, e.g. `"clouds.png"`.
    pub name:      String,
    /// Directory fragment between the category folder and the file.
    /// Empty string when the file sits at the category root.
    pub subfolder: String,
}

impl FileRecord {
    /// Split `path` into name + subfolder relative to `folder`.
    ///
    /// A path outside `folder` keeps its own components. The scanner only
    /// produces paths under the folder, so that case stays theoretical.
    pub fn under(folder: &Path, path: &Path) -> FileRecord {
        let rel = path.strip_prefix(folder).unwrap_or(path);
        let name = rel
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let subfolder = rel
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        FileRecord {
            path: path.to_path_buf(),
            name,
            subfolder,
        }
    }

    /// The directory this file actually lives in: `folder` joined with the
    /// subfolder fragment.
    pub fn directory_under(&self, folder: &Path) -> PathBuf {
        if self.subfolder.is_empty() {
            folder.to_path_buf()
        } else {
            folder.join(&self.subfolder)
        }
    }
}

/// Place every new audio file of one category in a single call.
#[derive(Clone, Debug)]
pub struct SoundPlacement {
    pub directory:   PathBuf,
    pub files:       Vec<FileRecord>,
    pub channel:     u32,
    pub frame_start: i64,
}

/// Place every new video file of one category in a single call.
///
/// `with_audio` asks the surface to also create each movie's synchronized
/// sound strip, one channel below the movie.
#[derive(Clone, Debug)]
pub struct MoviePlacement {
    pub directory:   PathBuf,
    pub files:       Vec<FileRecord>,
    pub channel:     u32,
    pub frame_start: i64,
    pub with_audio:  bool,
}

/// Place one image strip with a fixed extent.
#[derive(Clone, Debug)]
pub struct ImagePlacement {
    /// Category folder joined with the record's subfolder.
    pub directory:   PathBuf,
    pub file:        FileRecord,
    pub channel:     u32,
    pub frame_start: i64,
    pub frame_end:   i64,
}
