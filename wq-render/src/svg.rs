//! SVG backend, used by the CLI `render` command.

use crate::draw::draw;
use crate::geometry::{Point, Rect, Size};
use crate::layout::ChartLayout;
use crate::options::RenderOptions;
use crate::surface::{Surface, TextStyle};
use std::fmt::Write;
use wq_core::model::ChartModel;

#[derive(Debug)]
pub struct SvgSurface {
    size: Size,
    title: String,
    body: String,
}

impl SvgSurface {
    pub fn new(size: Size, title: impl Into<String>) -> Self {
        Self {
            size,
            title: title.into(),
            body: String::new(),
        }
    }

    /// The complete document.
    pub fn finish(self) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img" font-family="sans-serif">"#,
            self.size.width, self.size.height
        );
        let _ = writeln!(output, "  <title>{}</title>", escape(&self.title));
        output.push_str(&self.body);
        output.push_str("</svg>\n");
        output
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        let _ = writeln!(
            self.body,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            escape(color)
        );
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, width: f64) {
        let _ = writeln!(
            self.body,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            escape(color),
            width
        );
    }

    fn draw_line(&mut self, from: Point, to: Point, color: &str, width: f64) {
        let _ = writeln!(
            self.body,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            escape(color),
            width
        );
    }

    fn draw_path(&mut self, points: &[Point], color: &str, width: f64) {
        if points.len() < 2 {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            points_attr(points),
            escape(color),
            width
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            center.x,
            center.y,
            radius,
            escape(color)
        );
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let transform = if style.rotation != 0.0 {
            format!(
                r#" transform="rotate({} {:.2} {:.2})""#,
                style.rotation, position.x, position.y
            )
        } else {
            String::new()
        };
        let _ = writeln!(
            self.body,
            r#"  <text x="{:.2}" y="{:.2}" font-size="{}" fill="{}" text-anchor="{}"{}{}>{}</text>"#,
            position.x,
            position.y,
            style.size,
            style.color,
            style.align.css_name(true),
            if style.bold { r#" font-weight="bold""# } else { "" },
            transform,
            escape(text)
        );
    }
}

/// Render a chart model straight to an SVG document.
pub fn render_svg(model: &ChartModel, options: &RenderOptions) -> String {
    let layout = ChartLayout::compute(model, model.axis_domain().as_ref(), options);
    let mut surface = SvgSurface::new(options.logical_size, model.title());
    draw(&layout, model, &mut surface);
    surface.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TextAlign;
    use wq_core::config::{ChartKind, PlotConfiguration};
    use wq_core::model;
    use wq_core::record::Record;

    #[test]
    fn text_is_escaped() {
        let mut svg = SvgSurface::new(Size::new(10.0, 10.0), "a < b");
        svg.draw_text(
            "Fish & Chips",
            Point::new(1.0, 2.0),
            &TextStyle::default().align(TextAlign::Center),
        );
        let doc = svg.finish();
        assert!(doc.contains("<title>a &lt; b</title>"));
        assert!(doc.contains(">Fish &amp; Chips</text>"));
        assert!(doc.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn rotated_text_gets_transform() {
        let mut svg = SvgSurface::new(Size::new(10.0, 10.0), "t");
        svg.draw_text("A", Point::new(5.0, 6.0), &TextStyle::default().rotated(-90.0));
        assert!(svg.finish().contains(r#"transform="rotate(-90 5.00 6.00)""#));
    }

    #[test]
    fn renders_a_complete_document() {
        let records = vec![Record::new("pH", "A", 2020).with_average(7.0).with_count(4.0)];
        let chart = model::build(&records, &PlotConfiguration::new("pH", ["A"], ChartKind::Comparison));
        let doc = render_svg(&chart, &RenderOptions::default());
        assert!(doc.starts_with(r#"<svg viewBox="0 0 800 400""#));
        assert!(doc.trim_end().ends_with("</svg>"));
        assert!(doc.contains(">pH by site</text>"));
        assert!(doc.contains(">n=4</text>"));
    }
}
