// Per-tick game state: the arena and the player character

use super::arena::ArenaGrid;
use super::characters::Character;
use super::config::GameConfig;
use crate::engine::assets::{AnimationClip, SheetError, SpriteSheetIndex};
use crate::engine::renderer::RenderTarget;
use glam::Vec2;
use std::sync::Arc;

/// Clips the game cannot run without
pub const REQUIRED_CLIPS: [&str; 3] = ["Idle", "Run", "BG"];

/// Everything one tick reads or mutates
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub arena: ArenaGrid,
    pub character: Character,
    background: Arc<AnimationClip>,
    tile_scale: f32,
}

impl GameWorld {
    /// Validate the sheet's clips and spawn the character
    pub fn new(config: &GameConfig, sheet: &SpriteSheetIndex) -> Result<Self, SheetError> {
        sheet.validate_clips(&REQUIRED_CLIPS)?;
        let background = sheet.require_clip("BG")?;

        Ok(Self {
            arena: ArenaGrid::new(),
            character: Character::new(&config.character, sheet, config.frame_rate)?,
            background,
            tile_scale: config.tile_scale,
        })
    }

    /// One tick of simulation with the sampled control vector
    pub fn tick(&mut self, dt: f32, control: Vec2) {
        self.character.update(dt, control);
    }

    /// Queue the background tiles, then the character on top
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        self.arena.draw(target, &self.background, self.tile_scale);
        self.character.draw(target);
    }
}
