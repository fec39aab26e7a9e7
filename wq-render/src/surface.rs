//! Paint operations the renderer needs from a backend.
//!
//! Coordinates are logical chart units. Backends scale to device pixels
//! themselves. Colors are CSS color strings.

use crate::geometry::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

impl TextAlign {
    /// Name used by both canvas `textAlign` and SVG `text-anchor`.
    pub fn css_name(&self, svg: bool) -> &'static str {
        match (self, svg) {
            (TextAlign::Start, false) => "left",
            (TextAlign::Center, false) => "center",
            (TextAlign::End, false) => "right",
            (TextAlign::Start, true) => "start",
            (TextAlign::Center, true) => "middle",
            (TextAlign::End, true) => "end",
        }
    }
}

/// How a piece of text is drawn. `position` passed alongside is the text
/// baseline anchor; `rotation` turns the text around it, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: &'static str,
    pub align: TextAlign,
    pub bold: bool,
    pub rotation: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            color: "#333",
            align: TextAlign::Start,
            bold: false,
            rotation: 0.0,
        }
    }
}

impl TextStyle {
    pub fn sized(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// CSS font shorthand, e.g. `bold 14px sans-serif`.
    pub fn font(&self) -> String {
        format!(
            "{}{}px sans-serif",
            if self.bold { "bold " } else { "" },
            self.size
        )
    }
}

/// Minimal drawing backend.
pub trait Surface {
    /// Clear everything drawn so far.
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: &str);

    fn stroke_rect(&mut self, rect: Rect, color: &str, width: f64);

    fn draw_line(&mut self, from: Point, to: Point, color: &str, width: f64);

    /// Open polyline through `points`.
    fn draw_path(&mut self, points: &[Point], color: &str, width: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);
}

/// A recorded paint call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect { rect: Rect, color: String },
    StrokeRect { rect: Rect, color: String },
    Line { from: Point, to: Point, color: String },
    Path { points: Vec<Point>, color: String },
    Circle { center: Point, radius: f64, color: String },
    Text { text: String, position: Point, style: TextStyle },
}

/// Surface that records calls instead of painting. Used by tests and by
/// anything that wants to inspect a frame.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn filled_rects(&self) -> Vec<(Rect, &str)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, color } => Some((*rect, color.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color: color.to_string(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, _width: f64) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            color: color.to_string(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: &str, _width: f64) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color: color.to_string(),
        });
    }

    fn draw_path(&mut self, points: &[Point], color: &str, _width: f64) {
        self.ops.push(DrawOp::Path {
            points: points.to_vec(),
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            position,
            style: *style,
        });
    }
}
