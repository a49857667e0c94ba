// Arena grid: the fixed 15x13 stage layout

use crate::core::math::Rect;
use crate::engine::assets::AnimationClip;
use crate::engine::renderer::RenderTarget;
use glam::{Affine2, Vec2};

/// Cells across
pub const GRID_WIDTH: u32 = 15;
/// Cells down
pub const GRID_HEIGHT: u32 = 13;
/// World units per cell side
pub const CELL_SIZE: f32 = 64.0;

/// What occupies a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Indestructible wall or pillar
    Block,
    /// Destructible crate
    Crate,
    /// Nothing to draw; crates are never destroyed yet
    #[allow(dead_code)]
    Empty,
}

impl CellKind {
    /// Index of this kind's tile in the "BG" clip
    pub fn tile_index(&self) -> Option<usize> {
        match self {
            Self::Block => Some(0),
            Self::Crate => Some(1),
            Self::Empty => None,
        }
    }
}

/// One grid position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaCell {
    pub kind: CellKind,
    /// Grid coordinates (x, y)
    #[allow(dead_code)]
    pub grid: (u32, u32),
    /// World-space center
    pub center: Vec2,
    /// World-space bounds of the cell; no collision reads them yet
    #[allow(dead_code)]
    pub bounds: Rect,
}

/// Generate the stage layout, column by column
///
/// Border cells and cells with both coordinates even are blocks; every other
/// cell is a crate.
pub fn generate() -> Vec<ArenaCell> {
    let mut cells = Vec::with_capacity((GRID_WIDTH * GRID_HEIGHT) as usize);

    for x in 0..GRID_WIDTH {
        for y in 0..GRID_HEIGHT {
            let border = x == 0 || x == GRID_WIDTH - 1 || y == 0 || y == GRID_HEIGHT - 1;
            let pillar = x % 2 == 0 && y % 2 == 0;
            let kind = if border || pillar {
                CellKind::Block
            } else {
                CellKind::Crate
            };

            let min = Vec2::new(x as f32 * CELL_SIZE, y as f32 * CELL_SIZE);
            cells.push(ArenaCell {
                kind,
                grid: (x, y),
                center: min + Vec2::splat(CELL_SIZE / 2.0),
                bounds: Rect {
                    min,
                    max: min + Vec2::splat(CELL_SIZE),
                },
            });
        }
    }

    cells
}

/// The generated arena, read-only for the life of the game
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaGrid {
    cells: Vec<ArenaCell>,
}

impl ArenaGrid {
    pub fn new() -> Self {
        Self { cells: generate() }
    }

    /// Queue every non-empty cell's background tile, scaled and centered on the cell
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T, tiles: &AnimationClip, scale: f32) {
        for cell in &self.cells {
            let Some(frame) = cell.kind.tile_index().and_then(|i| tiles.frame(i)) else {
                continue;
            };
            let transform =
                Affine2::from_scale_angle_translation(Vec2::splat(scale), 0.0, cell.center);
            target.draw_frame(frame, transform);
        }
    }
}

impl Default for ArenaGrid {
    fn default() -> Self {
        Self::new()
    }
}
