// Asset loading system
//
// Loads the sprite sheet surface and its clip descriptor once at startup.
// Everything produced here is immutable afterwards.

mod descriptor;
mod loader;
mod sheet;

pub use loader::AssetLoader;
pub use sheet::{AnimationClip, Frame, SpriteSheetIndex};

use std::path::PathBuf;

/// Sprite sheet loading errors
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode sprite sheet: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Descriptor line {line}: field `{field}` is not a valid index: {value:?}")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Descriptor line {line}: expected 3 fields (name,start,end), got {fields}")]
    MalformedRow { line: usize, fields: usize },

    #[error("Descriptor line {line}: clip `{clip}` references frames {start}..={end} but the sheet has {frame_count} frames")]
    IndexOutOfRange {
        line: usize,
        clip: String,
        start: i64,
        end: i64,
        frame_count: usize,
    },

    #[error("Descriptor line {line}: clip `{clip}` has start {start} after end {end}")]
    InvalidRange {
        line: usize,
        clip: String,
        start: usize,
        end: usize,
    },

    #[error("Frame width must be greater than zero")]
    InvalidFrameWidth,

    #[error("Frame rate must be a positive number of seconds, got {0}")]
    InvalidFrameRate(f32),

    #[error("Required clip not found: {0}")]
    MissingClip(String),
}
