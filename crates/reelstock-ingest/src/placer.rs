// crates/reelstock-ingest/src/placer.rs
//
// Turns one category's new files into placement requests and collects the
// strips the surface reports back. Audio and video go down in a single
// call; images advance frame by frame, one call each.

use std::path::{Path, PathBuf};

use anyhow::Result;

use reelstock_core::{
    Category, FileRecord, ImagePlacement, ImportOptions, MoviePlacement, SoundPlacement, Strip,
};

use crate::host::TimelineSurface;

pub struct StripPlacer<'a, T: TimelineSurface + ?Sized> {
    surface: &'a mut T,
}

impl<'a, T: TimelineSurface + ?Sized> StripPlacer<'a, T> {
    pub fn new(surface: &'a mut T) -> Self {
        Self { surface }
    }

    /// Place strips for exactly `new_paths`, all on `channel`.
    ///
    /// Image strip `i` starts at `frame_start + i * (length + padding)`
    /// and ends `length` frames later; audio and video start together at
    /// `frame_start`. Returns every strip the surface created, in
    /// creation order.
    pub fn place(
        &mut self,
        category: Category,
        folder: &Path,
        new_paths: &[PathBuf],
        channel: u32,
        frame_start: i64,
        options: &ImportOptions,
    ) -> Result<Vec<Strip>> {
        let files: Vec<FileRecord> = new_paths
            .iter()
            .map(|p| FileRecord::under(folder, p))
            .collect();

        match category {
            Category::Audio => self.surface.add_sounds(&SoundPlacement {
                directory: folder.to_path_buf(),
                files,
                channel,
                frame_start,
            }),

            Category::Video => self.surface.add_movies(&MoviePlacement {
                directory: folder.to_path_buf(),
                files,
                channel,
                frame_start,
                with_audio: options.keep_audio,
            }),

            Category::Image => {
                let mut created = Vec::new();
                let mut frame = frame_start;
                for file in files {
                    let request = ImagePlacement {
                        directory:   file.directory_under(folder),
                        channel,
                        frame_start: frame,
                        frame_end:   frame + options.image_length,
                        file,
                    };
                    created.extend(self.surface.add_image(&request)?);
                    frame += options.image_length + options.image_padding;
                }
                Ok(created)
            }
        }
    }
}
