use crate::constants::CONTEXT_2D;
use glam::Vec2;
use linkwave_core::{RingSurface, Stroke};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `RingSurface` over a 2D canvas context. Coordinates are backing-store
/// pixels, so geometry scales with the device pixel ratio.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context(CONTEXT_2D)
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

impl RingSurface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("arc error: {:?}", e);
            return;
        }
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.stroke();
    }
}
