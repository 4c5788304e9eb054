//! Surface that records draw calls instead of rasterizing them
//!
//! Used by the headless runner and by tests that check draw order.

use glam::Vec2;

use super::{Rect, SpriteId, Surface, TextStyle};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    SubImage { sprite: SpriteId, src: Rect, dst: Rect },
    Text { text: String, pos: Vec2, style: TextStyle },
}

/// Collects the draw calls of one or more ticks
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Destination rects of every blit of `sprite`, in draw order
    pub fn blits_of(&self, sprite: SpriteId) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::SubImage { sprite: s, dst, .. } if *s == sprite => Some(*dst),
                _ => None,
            })
            .collect()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, region: Rect) {
        self.commands.push(DrawCommand::Clear(region));
    }

    fn draw_sub_image(&mut self, sprite: SpriteId, src: Rect, dst: Rect) {
        self.commands.push(DrawCommand::SubImage { sprite, src, dst });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style: style.clone(),
        });
    }
}
