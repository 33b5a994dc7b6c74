// crates/reelstock-ingest/src/effects.rs
//
// Non-destructive compositing wrapper for freshly placed visual strips:
// the source strip is muted and a transform effect blends its output
// alpha-over the channels below. Pixel data is never touched, so a later
// resize/recenter pass can operate on the effect alone.

use anyhow::Result;

use reelstock_core::{transform_name, Strip};

use crate::host::TimelineSurface;

pub struct EffectAttacher<'a, T: TimelineSurface + ?Sized> {
    surface: &'a mut T,
}

impl<'a, T: TimelineSurface + ?Sized> EffectAttacher<'a, T> {
    pub fn new(surface: &'a mut T) -> Self {
        Self { surface }
    }

    /// Wrap every visual strip in `strips` with a mute + transform pair.
    ///
    /// Sound strips (the embedded audio imported alongside a movie) pass
    /// through untouched. Returns the created effects; they stay out of
    /// the run's final selection.
    pub fn attach(&mut self, strips: &[Strip]) -> Result<Vec<Strip>> {
        let visual: Vec<&Strip> = strips.iter().filter(|s| s.kind.is_visual()).collect();
        if visual.is_empty() {
            return Ok(Vec::new());
        }

        let mut effects = Vec::with_capacity(visual.len());
        for strip in visual {
            self.surface.set_mute(strip.id, true)?;
            let effect = self
                .surface
                .add_transform_effect(strip.id, &transform_name(&strip.name))?;
            effects.push(effect);
        }

        log::info!("wrapped {} visual strips in transform effects", effects.len());
        Ok(effects)
    }
}

/// Offset that would center an undersized image on the render canvas.
///
/// `None` when a dimension is unknown (zero) or the image already covers
/// the canvas on both axes. Strip dimensions are not available at import
/// time, so the attacher never calls this itself; hosts that probe their
/// media can apply it to the transform effects afterwards.
pub fn centering_offset(image: (u32, u32), canvas: (u32, u32)) -> Option<(i64, i64)> {
    let (iw, ih) = image;
    let (cw, ch) = canvas;
    if iw == 0 || ih == 0 {
        return None;
    }
    if iw >= cw && ih >= ch {
        return None;
    }
    Some((
        (cw as i64 - iw as i64) / 2,
        (ch as i64 - ih as i64) / 2,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::ProjectDoc;
    use reelstock_core::{BlendMode, FileRecord, ImagePlacement, SoundPlacement, StripKind};
    use std::path::Path;

    fn place_image(doc: &mut ProjectDoc, name: &str) -> Strip {
        let folder = Path::new("/p/IMG");
        let req = ImagePlacement {
            directory:   folder.to_path_buf(),
            file:        FileRecord::under(folder, &folder.join(name)),
            channel:     2,
            frame_start: 1,
            frame_end:   97,
        };
        doc.add_image(&req).unwrap().remove(0)
    }

    #[test]
    fn every_visual_strip_gets_a_muted_source_and_one_effect() {
        let mut doc = ProjectDoc::new();
        let a = place_image(&mut doc, "a.png");
        let b = place_image(&mut doc, "b.png");

        let effects = EffectAttacher::new(&mut doc).attach(&[a.clone(), b.clone()]).unwrap();

        assert_eq!(effects.len(), 2);
        for (strip, effect) in [(&a, &effects[0]), (&b, &effects[1])] {
            assert_eq!(effect.kind, StripKind::Transform);
            assert_eq!(effect.blend, BlendMode::AlphaOver);
            assert_eq!(effect.input, Some(strip.id));
            assert_eq!(effect.name, transform_name(&strip.name));

            let source = doc.strip(strip.id).unwrap();
            assert!(source.mute);
            assert_eq!(source.effect, Some(effect.id));
        }
    }

    #[test]
    fn sound_strips_pass_through_untouched() {
        let mut doc = ProjectDoc::new();
        let folder = Path::new("/p/AUDIO");
        let sounds = doc
            .add_sounds(&SoundPlacement {
                directory:   folder.to_path_buf(),
                files:       vec![FileRecord::under(folder, &folder.join("a.wav"))],
                channel:     1,
                frame_start: 1,
            })
            .unwrap();

        let effects = EffectAttacher::new(&mut doc).attach(&sounds).unwrap();

        assert!(effects.is_empty());
        let sound = doc.strip(sounds[0].id).unwrap();
        assert!(!sound.mute);
        assert_eq!(sound.effect, None);
    }

    #[test]
    fn empty_input_attaches_nothing() {
        let mut doc = ProjectDoc::new();
        assert!(EffectAttacher::new(&mut doc).attach(&[]).unwrap().is_empty());
    }

    #[test]
    fn centering_offset_centers_a_small_image() {
        assert_eq!(centering_offset((1280, 720), (1920, 1080)), Some((320, 180)));
    }

    #[test]
    fn centering_offset_skips_unknown_and_covering_dimensions() {
        assert_eq!(centering_offset((0, 720), (1920, 1080)), None);
        assert_eq!(centering_offset((1920, 1080), (1920, 1080)), None);
        assert_eq!(centering_offset((3840, 2160), (1920, 1080)), None);
    }

    #[test]
    fn centering_offset_handles_one_oversized_axis() {
        // Wider than the canvas but shorter: still centered, x goes negative.
        assert_eq!(centering_offset((2560, 720), (1920, 1080)), Some((-320, 180)));
    }
}
