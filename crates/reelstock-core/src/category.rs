// crates/reelstock-core/src/category.rs
//
// The three media categories and everything keyed off them: project
// subfolder names, ledger resource names, extension sets, scan depth.

use serde::{Deserialize, Serialize};

use crate::strip::StripKind;

/// Prefix of the per-category ledger resources in the project store.
pub const LEDGER_PREFIX: &str = "IMPORT_";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Audio,
    Image,
    Video,
}

impl Category {
    /// Fixed processing order. Channel allocation and ledger commits both
    /// follow this order, so it must never be reordered casually.
    pub const ALL: [Category; 3] = [Category::Audio, Category::Image, Category::Video];

    /// Canonical project subfolder name. Matching against on-disk folders
    /// is case-insensitive, see [`Category::from_folder_name`].
    pub fn folder_token(self) -> &'static str {
        match self {
            Category::Audio => "AUDIO",
            Category::Image => "IMG",
            Category::Video => "VIDEO",
        }
    }

    /// Name of this category's ledger resource in the project store.
    pub fn ledger_name(self) -> &'static str {
        match self {
            Category::Audio => "IMPORT_AUDIO",
            Category::Image => "IMPORT_IMG",
            Category::Video => "IMPORT_VIDEO",
        }
    }

    /// Lowercase file extensions scanned for this category.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Category::Audio => &["wav", "mp3", "ogg", "flac", "aac", "m4a"],
            Category::Image => &["png", "jpg", "jpeg", "tga", "tif", "tiff", "bmp"],
            Category::Video => &["mp4", "mov", "mkv", "avi", "webm", "flv", "mts"],
        }
    }

    /// Only still images are collected from nested subfolders.
    pub fn recursive(self) -> bool {
        matches!(self, Category::Image)
    }

    /// Visual categories get a transform effect attached after placement.
    pub fn is_visual(self) -> bool {
        matches!(self, Category::Image | Category::Video)
    }

    /// Kind of the media strips this category places.
    pub fn strip_kind(self) -> StripKind {
        match self {
            Category::Audio => StripKind::Sound,
            Category::Image => StripKind::Image,
            Category::Video => StripKind::Movie,
        }
    }

    /// Match an on-disk folder name against the category tokens,
    /// case-insensitively. `"img"`, `"Img"` and `"IMG"` all map to `Image`.
    pub fn from_folder_name(name: &str) -> Option<Category> {
        let upper = name.to_uppercase();
        Category::ALL
            .into_iter()
            .find(|c| c.folder_token() == upper)
    }
}
