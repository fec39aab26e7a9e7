//! Painting a computed layout onto a [`Surface`].

use crate::geometry::{Point, Rect};
use crate::layout::{ChartLayout, Glyph, LABEL_LINE_HEIGHT};
use crate::surface::{Surface, TextAlign, TextStyle};
use crate::tooltip::format_value;
use wq_core::model::ChartModel;

pub const BACKGROUND: &str = "#ffffff";
pub const GRID_COLOR: &str = "#e0e0e0";
pub const AXIS_COLOR: &str = "#9e9e9e";
pub const TEXT_COLOR: &str = "#333333";
pub const MUTED_TEXT: &str = "#757575";
pub const WHISKER_COLOR: &str = "#455a64";
pub const MEDIAN_COLOR: &str = "#ffffff";
pub const MEDIAN_LINE_COLOR: &str = "#ff9800";
pub const NO_DATA_TEXT: &str = "No data";

/// Paint one frame. Clears the surface first.
pub fn draw(layout: &ChartLayout, model: &ChartModel, surface: &mut dyn Surface) {
    surface.clear();
    surface.fill_rect(
        Rect::new(0.0, 0.0, layout.size.width, layout.size.height),
        BACKGROUND,
    );
    draw_titles(layout, model, surface);

    let (Some(ticks), Some(scale)) = (&layout.ticks, &layout.scale) else {
        surface.draw_text(
            NO_DATA_TEXT,
            layout.plot.center(),
            &TextStyle::sized(14.0)
                .color(MUTED_TEXT)
                .align(TextAlign::Center),
        );
        return;
    };

    let plot = layout.plot;
    let tick_style = TextStyle::sized(11.0)
        .color(MUTED_TEXT)
        .align(TextAlign::End);
    for &value in &ticks.values {
        let y = scale.y(value);
        surface.draw_line(
            Point::new(plot.x, y),
            Point::new(plot.right(), y),
            GRID_COLOR,
            1.0,
        );
        surface.draw_text(&format_value(value), Point::new(plot.x - 8.0, y + 4.0), &tick_style);
    }
    surface.draw_line(
        Point::new(plot.x, plot.y),
        Point::new(plot.x, plot.bottom()),
        AXIS_COLOR,
        1.0,
    );
    surface.draw_line(
        Point::new(plot.x, plot.bottom()),
        Point::new(plot.right(), plot.bottom()),
        AXIS_COLOR,
        1.0,
    );

    for (index, glyph) in layout.glyphs.iter().enumerate() {
        match (glyph, model) {
            (
                Glyph::Box {
                    center_x,
                    whisker_top,
                    whisker_bottom,
                    body,
                    median_y,
                },
                ChartModel::Boxplot(m),
            ) => {
                let cap = body.width / 4.0;
                surface.draw_line(
                    Point::new(*center_x, *whisker_top),
                    Point::new(*center_x, *whisker_bottom),
                    WHISKER_COLOR,
                    1.5,
                );
                for y in [*whisker_top, *whisker_bottom] {
                    surface.draw_line(
                        Point::new(center_x - cap, y),
                        Point::new(center_x + cap, y),
                        WHISKER_COLOR,
                        1.5,
                    );
                }
                surface.fill_rect(*body, &m.color);
                surface.stroke_rect(*body, WHISKER_COLOR, 1.0);
                surface.draw_line(
                    Point::new(body.x, *median_y),
                    Point::new(body.right(), *median_y),
                    MEDIAN_COLOR,
                    2.0,
                );
            }
            (Glyph::Bar { rect, .. }, ChartModel::Bar(m)) => {
                let color = m.colors.get(index).map_or(TEXT_COLOR, String::as_str);
                surface.fill_rect(*rect, color);
                if let (Some(anchor), Some(key)) = (glyph.in_bar_label_anchor(), m.keys.get(index)) {
                    surface.draw_text(
                        key,
                        anchor,
                        &TextStyle::sized(11.0).color("#ffffff").rotated(-90.0),
                    );
                }
            }
            _ => log::warn!("[WQ] draw: glyph {index} does not match the chart kind"),
        }
    }

    let medians = layout.median_path();
    if layout.options.show_median_line && medians.len() > 1 {
        surface.draw_path(&medians, MEDIAN_LINE_COLOR, 2.0);
        for point in &medians {
            surface.fill_circle(*point, 3.0, MEDIAN_LINE_COLOR);
        }
    }

    if layout.options.show_counts {
        let count_style = TextStyle::sized(10.0)
            .color(MUTED_TEXT)
            .align(TextAlign::Center);
        for (glyph, count) in layout.glyphs.iter().zip(model.counts()) {
            if let Some(count) = count {
                surface.draw_text(&format!("n={count}"), glyph.count_anchor(), &count_style);
            }
        }
    }

    let label_style = TextStyle::sized(11.0)
        .color(TEXT_COLOR)
        .align(TextAlign::Center);
    for label in &layout.x_labels {
        for (line_no, line) in label.lines.iter().enumerate() {
            let position = Point::new(
                label.anchor.x,
                label.anchor.y + line_no as f64 * LABEL_LINE_HEIGHT,
            );
            surface.draw_text(line, position, &label_style);
        }
    }
}

fn draw_titles(layout: &ChartLayout, model: &ChartModel, surface: &mut dyn Surface) {
    let center = layout.size.width / 2.0;
    surface.draw_text(
        model.title(),
        Point::new(center, 22.0),
        &TextStyle::sized(16.0)
            .color(TEXT_COLOR)
            .align(TextAlign::Center)
            .bold(),
    );
    if let Some(subtitle) = model.subtitle() {
        surface.draw_text(
            subtitle,
            Point::new(center, 40.0),
            &TextStyle::sized(12.0)
                .color(MUTED_TEXT)
                .align(TextAlign::Center),
        );
    }
}
