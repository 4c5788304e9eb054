//! Canvas 2D backend (WASM only)

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use super::{Rect, SpriteId, Surface, TextStyle};

/// Draws onto a `<canvas>` using images preloaded in the page
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: HashMap<SpriteId, HtmlImageElement>,
}

impl CanvasSurface {
    /// Grab the 2D context and look up every sprite `<img>` by id
    pub fn new(canvas: &HtmlCanvasElement, document: &Document) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let mut images = HashMap::new();
        for sprite in SpriteId::ALL {
            let element = document
                .get_element_by_id(sprite.element_id())
                .ok_or_else(|| JsValue::from_str(&format!("missing #{}", sprite.element_id())))?;
            images.insert(sprite, element.dyn_into::<HtmlImageElement>()?);
        }

        Ok(Self { ctx, images })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, region: Rect) {
        self.ctx.clear_rect(
            region.x as f64,
            region.y as f64,
            region.w as f64,
            region.h as f64,
        );
    }

    fn draw_sub_image(&mut self, sprite: SpriteId, src: Rect, dst: Rect) {
        let Some(image) = self.images.get(&sprite) else {
            return;
        };
        if let Err(e) = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                src.x as f64,
                src.y as f64,
                src.w as f64,
                src.h as f64,
                dst.x as f64,
                dst.y as f64,
                dst.w as f64,
                dst.h as f64,
            )
        {
            log::warn!("drawImage failed for {:?}: {:?}", sprite, e);
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_text_align(style.align.as_str());
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
    }
}
