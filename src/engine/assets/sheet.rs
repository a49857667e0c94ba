// Sprite sheet index: a flat strip of fixed-width frames partitioned into named clips

use super::descriptor::{parse_descriptor, ClipRow};
use super::loader::AssetLoader;
use super::SheetError;
use crate::core::math::Rect;
use image::RgbaImage;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// A rectangular region of the sheet surface, in pixels (y grows downward)
pub type Frame = Rect;

/// A named, ordered run of frames
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// Name of the clip (e.g. "Idle", "Run", "BG")
    pub name: String,
    /// Frames in playback order
    pub frames: Vec<Frame>,
}

impl AnimationClip {
    /// Number of frames in the clip
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Get a frame by index
    pub fn frame(&self, index: usize) -> Option<Frame> {
        self.frames.get(index).copied()
    }
}

/// Decoded sheet surface plus its named clips
///
/// Built once at startup and shared read-only behind an `Arc`.
#[derive(Debug)]
pub struct SpriteSheetIndex {
    surface: RgbaImage,
    frames: Vec<Frame>,
    clips: HashMap<String, Arc<AnimationClip>>,
}

impl SpriteSheetIndex {
    /// Load the surface and descriptor from disk and build the index
    pub fn build<P: AsRef<Path>, Q: AsRef<Path>>(
        surface_path: P,
        descriptor_path: Q,
        frame_width: u32,
    ) -> Result<Self, SheetError> {
        let bytes = AssetLoader::read_bytes(&surface_path)?;
        let surface = image::load_from_memory(&bytes)?.to_rgba8();
        let descriptor = AssetLoader::read_text(&descriptor_path)?;

        let index = Self::from_parts(surface, &descriptor, frame_width)?;
        info!(
            "Loaded sprite sheet {} ({}x{}): {} frames, {} clips",
            surface_path.as_ref().display(),
            index.width(),
            index.height(),
            index.frame_count(),
            index.clip_count()
        );
        Ok(index)
    }

    /// Build the index from an already decoded surface and descriptor text
    pub fn from_parts(
        surface: RgbaImage,
        descriptor: &str,
        frame_width: u32,
    ) -> Result<Self, SheetError> {
        let frames = slice_frames(surface.width(), surface.height(), frame_width)?;
        let rows = parse_descriptor(descriptor)?;

        let mut clips = HashMap::with_capacity(rows.len());
        for row in rows {
            let clip = bind_clip(&frames, row)?;
            debug!("Bound clip `{}` to {} frames", clip.name, clip.len());
            if let Some(previous) = clips.insert(clip.name.clone(), Arc::new(clip)) {
                warn!("Descriptor rebinds clip `{}`, later row wins", previous.name);
            }
        }

        Ok(Self {
            surface,
            frames,
            clips,
        })
    }

    /// Look up a clip that must exist
    pub fn require_clip(&self, name: &str) -> Result<Arc<AnimationClip>, SheetError> {
        self.clips
            .get(name)
            .cloned()
            .ok_or_else(|| SheetError::MissingClip(name.to_string()))
    }

    /// Check that every listed clip name is bound
    pub fn validate_clips(&self, names: &[&str]) -> Result<(), SheetError> {
        for name in names {
            self.require_clip(name)?;
        }
        Ok(())
    }

    /// The decoded surface
    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }
}

/// Cut a surface into consecutive full-height frames of `frame_width`
///
/// A trailing remainder narrower than `frame_width` is dropped.
pub fn slice_frames(width: u32, height: u32, frame_width: u32) -> Result<Vec<Frame>, SheetError> {
    if frame_width == 0 {
        return Err(SheetError::InvalidFrameWidth);
    }

    let count = width / frame_width;
    let frames = (0..count)
        .map(|i| {
            let x = (i * frame_width) as f32;
            Rect::new(x, 0.0, x + frame_width as f32, height as f32)
        })
        .collect();

    Ok(frames)
}

fn bind_clip(frames: &[Frame], row: ClipRow) -> Result<AnimationClip, SheetError> {
    let out_of_range = || SheetError::IndexOutOfRange {
        line: row.line,
        clip: row.name.clone(),
        start: row.start,
        end: row.end,
        frame_count: frames.len(),
    };

    let start = usize::try_from(row.start).map_err(|_| out_of_range())?;
    let end = usize::try_from(row.end).map_err(|_| out_of_range())?;
    if start >= frames.len() || end >= frames.len() {
        return Err(out_of_range());
    }
    if start > end {
        return Err(SheetError::InvalidRange {
            line: row.line,
            clip: row.name,
            start,
            end,
        });
    }

    Ok(AnimationClip {
        frames: frames[start..=end].to_vec(),
        name: row.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_surface(width: u32, height: u32) -> RgbaImage {
        RgbaImage::new(width, height)
    }

    #[test]
    fn test_slice_frame_count_and_bounds() {
        let frames = slice_frames(320, 32, 32).unwrap();
        assert_eq!(frames.len(), 10);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.min.x, (i * 32) as f32);
            assert_eq!(frame.max.x, ((i + 1) * 32) as f32);
            assert_eq!(frame.min.y, 0.0);
            assert_eq!(frame.max.y, 32.0);
        }
    }

    #[test]
    fn test_slice_drops_partial_remainder() {
        let frames = slice_frames(100, 16, 32).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].max.x, 96.0);

        assert!(slice_frames(31, 16, 32).unwrap().is_empty());
    }

    #[test]
    fn test_slice_rejects_zero_width() {
        assert!(matches!(
            slice_frames(320, 32, 0),
            Err(SheetError::InvalidFrameWidth)
        ));
    }

    #[test]
    fn test_idle_clip_on_320_wide_sheet() {
        let sheet = SpriteSheetIndex::from_parts(blank_surface(320, 32), "\"Idle\",0,3", 32).unwrap();
        let idle = sheet.clips.get("Idle").unwrap();

        assert_eq!(idle.len(), 4);
        for (k, frame) in idle.frames.iter().enumerate() {
            assert_eq!(*frame, sheet.frames[k]);
            assert_eq!(frame.width(), 32.0);
        }
    }

    #[test]
    fn test_clip_frames_are_offset_from_start() {
        let sheet =
            SpriteSheetIndex::from_parts(blank_surface(320, 32), "Idle,0,3\nRun,4,9", 32).unwrap();
        let run = sheet.clips.get("Run").unwrap();

        assert_eq!(run.len(), 6);
        for k in 0..run.len() {
            assert_eq!(run.frame(k), Some(sheet.frames[4 + k]));
        }
        assert_eq!(sheet.clip_count(), 2);
    }

    #[test]
    fn test_single_frame_clip() {
        let sheet = SpriteSheetIndex::from_parts(blank_surface(64, 32), "BG,1,1", 32).unwrap();
        let bg = sheet.clips.get("BG").unwrap();
        assert_eq!(bg.len(), 1);
        assert_eq!(bg.frame(0), Some(Rect::new(32.0, 0.0, 64.0, 32.0)));
    }

    #[test]
    fn test_end_beyond_frame_count_is_out_of_range() {
        let err = SpriteSheetIndex::from_parts(blank_surface(320, 32), "Run,4,10", 32).unwrap_err();
        match err {
            SheetError::IndexOutOfRange {
                line,
                clip,
                start,
                end,
                frame_count,
            } => {
                assert_eq!(line, 1);
                assert_eq!(clip, "Run");
                assert_eq!((start, end), (4, 10));
                assert_eq!(frame_count, 10);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_index_is_out_of_range() {
        let err = SpriteSheetIndex::from_parts(blank_surface(320, 32), "Idle,-1,3", 32).unwrap_err();
        assert!(matches!(err, SheetError::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = SpriteSheetIndex::from_parts(blank_surface(320, 32), "Idle,3,1", 32).unwrap_err();
        assert!(matches!(
            err,
            SheetError::InvalidRange {
                line: 1,
                start: 3,
                end: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_row_fails_whole_build() {
        let err = SpriteSheetIndex::from_parts(blank_surface(320, 32), "Idle,0,3\nRun,4,nine", 32)
            .unwrap_err();
        assert!(matches!(err, SheetError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_name_later_row_wins() {
        let sheet =
            SpriteSheetIndex::from_parts(blank_surface(320, 32), "Idle,0,3\nIdle,5,5", 32).unwrap();
        assert_eq!(sheet.clip_count(), 1);
        assert_eq!(sheet.clips.get("Idle").unwrap().len(), 1);
    }

    #[test]
    fn test_validate_required_clips() {
        let sheet =
            SpriteSheetIndex::from_parts(blank_surface(320, 32), "Idle,0,3\nRun,4,9", 32).unwrap();
        assert!(sheet.validate_clips(&["Idle", "Run"]).is_ok());

        let err = sheet.validate_clips(&["Idle", "Run", "BG"]).unwrap_err();
        assert!(matches!(err, SheetError::MissingClip(name) if name == "BG"));
    }

    #[test]
    fn test_clip_lookup_is_exact() {
        let sheet = SpriteSheetIndex::from_parts(blank_surface(320, 32), "Idle,0,3", 32).unwrap();
        assert!(sheet.require_clip("Idle").is_ok());
        assert!(matches!(sheet.require_clip("idle"), Err(SheetError::MissingClip(_))));
        assert!(matches!(sheet.require_clip("Idle "), Err(SheetError::MissingClip(_))));
    }

    #[test]
    fn test_build_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("sheet.png");
        let csv = dir.path().join("sheet.csv");
        blank_surface(96, 16).save(&png).unwrap();
        std::fs::write(&csv, "Idle,0,1\nRun,2,2\n").unwrap();

        let sheet = SpriteSheetIndex::build(&png, &csv, 32).unwrap();
        assert_eq!(sheet.width(), 96);
        assert_eq!(sheet.height(), 16);
        assert_eq!(sheet.frame_count(), 3);
        assert_eq!(sheet.clips.get("Idle").unwrap().len(), 2);
        assert_eq!(sheet.clips.get("Run").unwrap().frame(0), Some(Rect::new(64.0, 0.0, 96.0, 16.0)));
    }

    #[test]
    fn test_build_missing_surface_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("sheet.csv");
        std::fs::write(&csv, "Idle,0,1\n").unwrap();

        let err = SpriteSheetIndex::build(dir.path().join("missing.png"), &csv, 32).unwrap_err();
        assert!(matches!(err, SheetError::File { .. }));
    }

    #[test]
    fn test_build_missing_descriptor_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("sheet.png");
        blank_surface(64, 16).save(&png).unwrap();

        let err = SpriteSheetIndex::build(&png, dir.path().join("missing.csv"), 32).unwrap_err();
        assert!(matches!(err, SheetError::File { .. }));
    }

    #[test]
    fn test_build_garbage_surface_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("sheet.png");
        let csv = dir.path().join("sheet.csv");
        std::fs::write(&png, b"definitely not an image").unwrap();
        std::fs::write(&csv, "Idle,0,1\n").unwrap();

        let err = SpriteSheetIndex::build(&png, &csv, 32).unwrap_err();
        assert!(matches!(err, SheetError::Decode(_)));
    }

    #[test]
    fn test_index_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpriteSheetIndex>();
    }
}
