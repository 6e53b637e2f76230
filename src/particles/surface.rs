//! Drawing seam between the simulation and the canvas 2D API.
//!
//! `ParticleField` only ever talks to the [`Surface`] trait, which keeps the
//! per-frame logic testable without a browser.  `CanvasSurface` is the real
//! implementation over `CanvasRenderingContext2d`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::constants::ACCENT_RGB;

pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Wipe the whole surface.
    fn clear(&mut self);

    /// Filled circle in the accent hue at the given alpha.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64);

    /// Hairline between two points in the accent hue at the given alpha.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, alpha: f64, line_width: f64);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasSurface, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasSurface { canvas, context })
    }

    /// Resize the backing element.  Setting width/height on a canvas also
    /// clears its contents; the next frame repaints everything anyway.
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear(&mut self) {
        self.context
            .clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        self.context.begin_path();
        let _ = self
            .context
            .arc(x, y, radius, 0.0, 2.0 * std::f64::consts::PI);
        self.context.set_fill_style_str(&accent_rgba(alpha));
        self.context.fill();
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, alpha: f64, line_width: f64) {
        self.context.begin_path();
        self.context.set_stroke_style_str(&accent_rgba(alpha));
        self.context.set_line_width(line_width);
        self.context.move_to(x1, y1);
        self.context.line_to(x2, y2);
        self.context.stroke();
    }
}

fn accent_rgba(alpha: f64) -> String {
    let (r, g, b) = ACCENT_RGB;
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_rgba_formats_css_color() {
        assert_eq!(accent_rgba(0.25), "rgba(124, 106, 239, 0.25)");
    }
}

// wasm-bindgen tests ---------------------------------------------------------
