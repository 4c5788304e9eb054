//! Sprite sheet geometry and named animation tables
//!
//! Sheets are uniform grids: one animation per row, one frame per column.

use crate::renderer::Rect;

/// Game frames each showcase cell stays on screen
pub const SHADOW_DOG_STAGGER: u64 = 5;

/// Uniform grid of animation cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSheet {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl SpriteSheet {
    pub const fn new(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Source rectangle of the cell at (column, row)
    pub fn cell(&self, col: u32, row: u32) -> Rect {
        Rect::new(
            col as f32 * self.cell_width,
            row as f32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }
}

/// One named row of a sheet
#[derive(Debug, Clone)]
pub struct Animation {
    pub name: &'static str,
    pub row: u32,
    pub frames: Vec<Rect>,
}

impl Animation {
    /// Index of the last frame
    pub fn max_frame(&self) -> u32 {
        self.frames.len().saturating_sub(1) as u32
    }
}

/// Named animations laid out row by row on a sheet
#[derive(Debug, Clone)]
pub struct AnimationTable {
    pub sheet: SpriteSheet,
    animations: Vec<Animation>,
}

impl AnimationTable {
    /// Build a table from `(name, frame_count)` pairs; row `i` holds entry `i`
    pub fn new(sheet: SpriteSheet, rows: &[(&'static str, u32)]) -> Self {
        let animations = rows
            .iter()
            .enumerate()
            .map(|(row, &(name, count))| {
                let row = row as u32;
                Animation {
                    name,
                    row,
                    frames: (0..count).map(|col| sheet.cell(col, row)).collect(),
                }
            })
            .collect();
        Self { sheet, animations }
    }

    /// Player sheet: running on row 0, airborne on row 1
    pub fn player() -> Self {
        use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH};
        Self::new(
            SpriteSheet::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            &[("run", 9), ("jump", 6)],
        )
    }

    /// The full shadow dog sheet used by the sprite showcase
    pub fn shadow_dog() -> Self {
        Self::new(
            SpriteSheet::new(575.0, 523.0),
            &[
                ("idle", 7),
                ("jump", 7),
                ("fall", 7),
                ("run", 9),
                ("dizzy", 10),
                ("sit", 5),
                ("roll", 7),
                ("bite", 7),
                ("ko", 12),
                ("getHit", 4),
            ],
        )
    }

    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.animations.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animation> {
        self.animations.iter()
    }

    /// Frames of an animation, if it exists
    pub fn frames(&self, name: &str) -> Option<&[Rect]> {
        self.get(name).map(|a| a.frames.as_slice())
    }

    /// Last frame index of an animation
    pub fn max_frame(&self, name: &str) -> Option<u32> {
        self.get(name).map(Animation::max_frame)
    }

    /// Frame shown on `game_frame` when each cell is held for `stagger` frames
    pub fn frame_at(&self, name: &str, game_frame: u64, stagger: u64) -> Option<Rect> {
        let frames = self.frames(name)?;
        if frames.is_empty() {
            return None;
        }
        let position = (game_frame / stagger.max(1)) % frames.len() as u64;
        frames.get(position as usize).copied()
    }
}
