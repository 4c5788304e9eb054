//! Drawing surface abstraction
//!
//! The simulation only ever talks to a [`Surface`]: clear a region, blit a
//! sprite-sheet cell, draw a line of text. The browser build backs it with a
//! Canvas 2D context; tests and the headless runner record the calls.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCommand, RecordingSurface};

use glam::Vec2;

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size with its top-left corner at `pos`
    pub fn at(pos: Vec2, w: f32, h: f32) -> Self {
        Self::new(pos.x, pos.y, w, h)
    }
}

/// Images the game draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Background,
    Player,
    Enemy,
}

impl SpriteId {
    /// DOM id of the preloaded `<img>` element
    pub fn element_id(&self) -> &'static str {
        match self {
            SpriteId::Background => "backgroundImage",
            SpriteId::Player => "playerImage",
            SpriteId::Enemy => "enemyImage",
        }
    }

    pub const ALL: [SpriteId; 3] = [SpriteId::Background, SpriteId::Player, SpriteId::Enemy];
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// Font and fill for a line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: &'static str,
    /// CSS color
    pub color: &'static str,
    pub align: TextAlign,
}

impl TextStyle {
    pub const fn new(font: &'static str, color: &'static str, align: TextAlign) -> Self {
        Self { font, color, align }
    }
}

/// Opaque 2D drawing target
pub trait Surface {
    /// Clear a region to transparent
    fn clear(&mut self, region: Rect);

    /// Copy `src` from a sprite image into `dst` on the surface
    fn draw_sub_image(&mut self, sprite: SpriteId, src: Rect, dst: Rect);

    /// Draw a single line of text anchored at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}
