//! `wq_render::Surface` backed by an HTML canvas.
//!
//! The backing store is sized to the logical chart size times the device
//! pixel ratio, and the context transform scales logical units so the
//! renderer never deals with device pixels.

use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wq_render::geometry::{Point, Rect, Size};
use wq_render::surface::{Surface, TextStyle};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    logical: Size,
}

/// Look up a canvas by DOM id.
pub fn canvas_by_id(id: &str) -> Option<HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

/// Current on-screen rect of the element with `id`, in client coordinates.
pub fn client_rect(id: &str) -> Option<Rect> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    let r = element.get_bounding_client_rect();
    Some(Rect::new(r.x(), r.y(), r.width(), r.height()))
}

/// Browser viewport size in CSS pixels.
pub fn window_size() -> Size {
    let Some(window) = web_sys::window() else {
        return Size::ZERO;
    };
    let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(dimension(window.inner_width()), dimension(window.inner_height()))
}

impl CanvasSurface {
    /// Size the canvas backing store for `logical` and wrap its 2D context.
    pub fn attach(canvas: &HtmlCanvasElement, logical: Size) -> Result<Self, JsValue> {
        let ratio = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .filter(|r| *r > 0.0)
            .unwrap_or(1.0);
        canvas.set_width((logical.width * ratio).round() as u32);
        canvas.set_height((logical.height * ratio).round() as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;
        Ok(Self { ctx, logical })
    }

    fn stroke_with(&self, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.logical.width, self.logical.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: &str, width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.stroke_with(color, width);
    }

    fn draw_path(&mut self, points: &[Point], color: &str, width: f64) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for point in rest {
            self.ctx.line_to(point.x, point.y);
        }
        self.stroke_with(color, width);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x, center.y, radius, 0.0, 2.0 * PI)
            .is_ok()
        {
            self.ctx.set_fill_style_str(color);
            self.ctx.fill();
        }
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.ctx.save();
        self.ctx.set_font(&style.font());
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_text_align(style.align.css_name(false));
        let drawn = if style.rotation != 0.0 {
            self.ctx
                .translate(position.x, position.y)
                .and_then(|_| self.ctx.rotate(style.rotation.to_radians()))
                .and_then(|_| self.ctx.fill_text(text, 0.0, 0.0))
        } else {
            self.ctx.fill_text(text, position.x, position.y)
        };
        if let Err(e) = drawn {
            log::warn!("[WQ] canvas: fill_text failed: {:?}", e);
        }
        self.ctx.restore();
    }
}
