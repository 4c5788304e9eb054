//! Endlessly scrolling backdrop

use crate::consts::{BACKGROUND_HEIGHT, BACKGROUND_SPEED, BACKGROUND_WIDTH};
use crate::renderer::{Rect, SpriteId, Surface};

/// Horizontal scroll state for a single tiled image
#[derive(Debug, Clone)]
pub struct Background {
    /// Scroll offset, within [-width, 0]
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: BACKGROUND_WIDTH,
            height: BACKGROUND_HEIGHT,
            speed: BACKGROUND_SPEED,
        }
    }
}

impl Background {
    pub fn update(&mut self) {
        self.x -= self.speed;
        if self.x < -self.width {
            self.x = 0.0;
        }
    }

    /// Draw two copies side by side. The second copy sits one step to the
    /// left of a plain tiling so no seam shows on the wrap frame.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let src = Rect::new(0.0, 0.0, self.width, self.height);
        surface.draw_sub_image(
            SpriteId::Background,
            src,
            Rect::new(self.x, self.y, self.width, self.height),
        );
        surface.draw_sub_image(
            SpriteId::Background,
            src,
            Rect::new(self.x + self.width - self.speed, self.y, self.width, self.height),
        );
    }

    pub fn restart(&mut self) {
        self.x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;

    #[test]
    fn test_scrolls_left_by_speed() {
        let mut bg = Background::default();
        bg.update();
        assert_eq!(bg.x, -BACKGROUND_SPEED);
    }

    #[test]
    fn test_wraps_below_negative_width() {
        let mut bg = Background {
            width: 20.0,
            speed: 7.0,
            ..Default::default()
        };
        let xs: Vec<f32> = (0..4)
            .map(|_| {
                bg.update();
                bg.x
            })
            .collect();
        // -21 would fall past -width, so it snaps back to 0
        assert_eq!(xs, vec![-7.0, -14.0, 0.0, -7.0]);
    }

    #[test]
    fn test_exact_negative_width_does_not_wrap() {
        let mut bg = Background {
            width: 14.0,
            speed: 7.0,
            ..Default::default()
        };
        bg.update();
        bg.update();
        assert_eq!(bg.x, -14.0);
        bg.update();
        assert_eq!(bg.x, 0.0);
    }

    #[test]
    fn test_draws_overlapping_pair() {
        let mut bg = Background::default();
        bg.update();
        let mut surface = RecordingSurface::new();
        bg.draw(&mut surface);
        let blits = surface.blits_of(SpriteId::Background);
        assert_eq!(blits.len(), 2);
        assert_eq!(blits[0].x, -7.0);
        assert_eq!(blits[1].x, -7.0 + BACKGROUND_WIDTH - BACKGROUND_SPEED);
    }

    #[test]
    fn test_restart_resets_offset() {
        let mut bg = Background::default();
        for _ in 0..10 {
            bg.update();
        }
        bg.restart();
        assert_eq!(bg.x, 0.0);
    }
}
