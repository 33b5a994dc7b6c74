// crates/reelstock-ingest/src/doc.rs
//
// ProjectDoc: the JSON-backed project document used by the reelstock
// binary. One file holds the timeline (strips, playhead, selection) and
// the named text resources the ledgers persist into, so it satisfies
// both host traits at once.
//
// Real editors supply their own TimelineSurface / ProjectStore; this one
// exists so the pipeline can run, and be tested, without an editor.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, ensure, Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reelstock_core::{
    BlendMode, ImagePlacement, MoviePlacement, SoundPlacement, Strip, StripKind,
};

use crate::host::{ProjectStore, TimelineSurface};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectDoc {
    #[serde(default)]
    pub strips: Vec<Strip>,

    /// Named text resources, body stored verbatim (newline-terminated
    /// lines). The import ledgers live here.
    #[serde(default)]
    pub texts: BTreeMap<String, String>,

    #[serde(default = "default_frame")]
    pub current_frame: i64,

    /// Playhead position a running preview started from. `Some` while
    /// previewing; stop_playback restores it.
    #[serde(default)]
    pub preview_origin: Option<i64>,

    #[serde(default)]
    pub selection: Vec<Uuid>,

    /// Where this document was last saved. Runtime-only; a freshly
    /// deserialized doc gets it from `load`.
    #[serde(skip)]
    saved_path: Option<PathBuf>,
}

fn default_frame() -> i64 {
    1
}

impl Default for ProjectDoc {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectDoc {
    /// A fresh, never-saved document. `root_dir()` stays `None` until the
    /// first `save`, which is what makes the pipeline's unsaved-project
    /// gate observable.
    pub fn new() -> Self {
        Self {
            strips:         Vec::new(),
            texts:          BTreeMap::new(),
            current_frame:  default_frame(),
            preview_origin: None,
            selection:      Vec::new(),
            saved_path:     None,
        }
    }

    pub fn load(path: &Path) -> Result<ProjectDoc> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("cannot read project {}", path.display()))?;
        let mut doc: ProjectDoc = serde_json::from_str(&json)
            .with_context(|| format!("cannot parse project {}", path.display()))?;
        doc.saved_path = Some(absolute(path));
        Ok(doc)
    }

    pub fn save(&mut self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("cannot serialize project")?;
        fs::write(path, json)
            .with_context(|| format!("cannot write project {}", path.display()))?;
        self.saved_path = Some(absolute(path));
        Ok(())
    }

    pub fn strip(&self, id: Uuid) -> Option<&Strip> {
        self.strips.iter().find(|s| s.id == id)
    }

    fn strip_mut(&mut self, id: Uuid) -> Option<&mut Strip> {
        self.strips.iter_mut().find(|s| s.id == id)
    }

    /// Start a preview: remember where the playhead was so stop_playback
    /// can restore it, then let it run from `at`.
    pub fn begin_preview(&mut self, at: i64) {
        if self.preview_origin.is_none() {
            self.preview_origin = Some(self.current_frame);
        }
        self.current_frame = at;
    }

    fn push_media_strip(
        &mut self,
        kind:        StripKind,
        name:        &str,
        channel:     u32,
        frame_start: i64,
        frame_end:   Option<i64>,
        source:      Option<PathBuf>,
    ) -> Strip {
        let strip = Strip {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            channel,
            frame_start,
            frame_end,
            mute: false,
            blend: BlendMode::Replace,
            input: None,
            effect: None,
            source,
        };
        self.strips.push(strip.clone());
        strip
    }
}

/// Best-effort absolute form of a document path, so `root_dir` points at
/// a scannable directory even when the caller passed `"project.json"`.
fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

impl TimelineSurface for ProjectDoc {
    fn current_frame(&self) -> i64 {
        self.current_frame
    }

    fn first_free_channel(&self) -> u32 {
        self.strips
            .iter()
            .map(|s| s.channel)
            .max()
            .map_or(1, |top| top + 1)
    }

    fn stop_playback(&mut self) {
        if let Some(origin) = self.preview_origin.take() {
            self.current_frame = origin;
        }
    }

    fn add_sounds(&mut self, req: &SoundPlacement) -> Result<Vec<Strip>> {
        Ok(req
            .files
            .iter()
            .map(|f| {
                self.push_media_strip(
                    StripKind::Sound,
                    &f.name,
                    req.channel,
                    req.frame_start,
                    None,
                    Some(f.path.clone()),
                )
            })
            .collect())
    }

    fn add_movies(&mut self, req: &MoviePlacement) -> Result<Vec<Strip>> {
        let mut created = Vec::new();
        for f in &req.files {
            created.push(self.push_media_strip(
                StripKind::Movie,
                &f.name,
                req.channel,
                req.frame_start,
                None,
                Some(f.path.clone()),
            ));
            if req.with_audio {
                // The allocator shifted the movie up one slot to keep
                // this lane free.
                created.push(self.push_media_strip(
                    StripKind::Sound,
                    &f.name,
                    req.channel.saturating_sub(1).max(1),
                    req.frame_start,
                    None,
                    Some(f.path.clone()),
                ));
            }
        }
        Ok(created)
    }

    fn add_image(&mut self, req: &ImagePlacement) -> Result<Vec<Strip>> {
        Ok(vec![self.push_media_strip(
            StripKind::Image,
            &req.file.name,
            req.channel,
            req.frame_start,
            Some(req.frame_end),
            Some(req.file.path.clone()),
        )])
    }

    fn add_transform_effect(&mut self, source: Uuid, name: &str) -> Result<Strip> {
        let src = self
            .strip(source)
            .ok_or_else(|| anyhow!("no strip with id {source}"))?
            .clone();
        ensure!(
            src.effect.is_none(),
            "strip {} already has a transform effect",
            src.name,
        );
        ensure!(
            src.kind.is_visual(),
            "strip {} is not a visual strip",
            src.name,
        );

        let effect = Strip {
            id:          Uuid::new_v4(),
            name:        name.to_string(),
            kind:        StripKind::Transform,
            channel:     src.channel + 1,
            frame_start: src.frame_start,
            frame_end:   src.frame_end,
            mute:        false,
            blend:       BlendMode::AlphaOver,
            input:       Some(source),
            effect:      None,
            source:      None,
        };
        self.strips.push(effect.clone());
        // Back-link so the one-effect-per-strip invariant is checkable.
        if let Some(s) = self.strip_mut(source) {
            s.effect = Some(effect.id);
        }
        Ok(effect)
    }

    fn set_mute(&mut self, strip: Uuid, mute: bool) -> Result<()> {
        let s = self
            .strip_mut(strip)
            .ok_or_else(|| anyhow!("no strip with id {strip}"))?;
        s.mute = mute;
        Ok(())
    }

    fn replace_selection(&mut self, strips: &[Uuid]) -> Result<()> {
        self.selection = strips.to_vec();
        Ok(())
    }
}

impl ProjectStore for ProjectDoc {
    fn root_dir(&self) -> Option<PathBuf> {
        self.saved_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
    }

    fn text_lines(&self, name: &str) -> Option<Vec<String>> {
        self.texts
            .get(name)
            .map(|body| body.lines().map(str::to_owned).collect())
    }

    fn create_text(&mut self, name: &str) -> Result<()> {
        self.texts.entry(name.to_string()).or_default();
        Ok(())
    }

    fn append_lines(&mut self, name: &str, lines: &[String]) -> Result<()> {
        let body = self
            .texts
            .get_mut(name)
            .ok_or_else(|| anyhow!("no text resource named {name}"))?;
        for line in lines {
            body.push_str(line);
            body.push('\n');
        }
        Ok(())
    }
}
