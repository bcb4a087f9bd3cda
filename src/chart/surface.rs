//! 2D drawing target used by the chart renderer.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{DeckError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Two-stop linear gradient between two points.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub start_color: &'static str,
    pub end_color: &'static str,
}

/// Immediate-mode drawing surface. Output only; nothing is ever read back.
pub trait Surface {
    /// Width and height in surface pixels.
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    /// Full circle around `(x, y)`.
    fn circle(&mut self, x: f64, y: f64, radius: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn set_fill_color(&mut self, color: &str);
    fn set_fill_gradient(&mut self, gradient: &LinearGradient);
    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline_middle(&mut self);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// Surface backed by a canvas element's 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| DeckError::Dom("canvas 2d context".into()))?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ctx
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0)
            .ok();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_fill_gradient(&mut self, gradient: &LinearGradient) {
        let grd = self.ctx.create_linear_gradient(
            gradient.from.0,
            gradient.from.1,
            gradient.to.0,
            gradient.to.1,
        );
        grd.add_color_stop(0.0, gradient.start_color).ok();
        grd.add_color_stop(1.0, gradient.end_color).ok();
        self.ctx.set_fill_style_canvas_gradient(&grd);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_str());
    }

    fn set_text_baseline_middle(&mut self) {
        self.ctx.set_text_baseline("middle");
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ctx.fill_text(text, x, y).ok();
    }
}
