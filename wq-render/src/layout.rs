//! Pure geometry for one chart frame.
//!
//! [`ChartLayout::compute`] turns a model and its value domain into
//! positioned glyphs. Nothing here paints; see [`crate::draw`].

use crate::geometry::{Point, Rect, Size};
use crate::hit::HitMap;
use crate::options::RenderOptions;
use wq_core::axis::{AxisDomain, Ticks};
use wq_core::model::ChartModel;

/// Roughly this many tick intervals on the value axis.
pub const TICK_TARGET: usize = 6;

/// Bars shorter than this do not get an in-bar label.
pub const IN_BAR_LABEL_MIN_HEIGHT: f64 = 70.0;

/// Line height of wrapped x-axis labels.
pub const LABEL_LINE_HEIGHT: f64 = 13.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Room for title and subtitle above, tick labels left, and up to three
/// wrapped label lines below.
pub const MARGINS: Margins = Margins {
    top: 56.0,
    right: 20.0,
    bottom: 64.0,
    left: 60.0,
};

/// Linear value-to-y mapping. Larger values sit higher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YScale {
    pub min: f64,
    pub max: f64,
    pub top: f64,
    pub bottom: f64,
}

impl YScale {
    pub fn y(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return self.bottom;
        }
        self.bottom - (value - self.min) / span * (self.bottom - self.top)
    }
}

/// Positioned geometry of one plotted element.
#[derive(Debug, Clone, PartialEq)]
pub enum Glyph {
    Box {
        center_x: f64,
        /// Whisker end at the maximum.
        whisker_top: f64,
        /// Whisker end at the minimum.
        whisker_bottom: f64,
        /// Q3 at the top edge, Q1 at the bottom edge.
        body: Rect,
        median_y: f64,
    },
    Bar {
        rect: Rect,
        /// Bar grows downward from the baseline.
        negative: bool,
    },
}

impl Glyph {
    pub fn center_x(&self) -> f64 {
        match self {
            Glyph::Box { center_x, .. } => *center_x,
            Glyph::Bar { rect, .. } => rect.center_x(),
        }
    }

    /// Where a count label goes: just outside the element's far end.
    pub fn count_anchor(&self) -> Point {
        match self {
            Glyph::Box {
                center_x,
                whisker_top,
                ..
            } => Point::new(*center_x, whisker_top - 6.0),
            Glyph::Bar { rect, negative } if *negative => {
                Point::new(rect.center_x(), rect.bottom() + 14.0)
            }
            Glyph::Bar { rect, .. } => Point::new(rect.center_x(), rect.y - 6.0),
        }
    }

    /// Baseline anchor for a label rotated inside the bar, when it fits.
    pub fn in_bar_label_anchor(&self) -> Option<Point> {
        match self {
            Glyph::Bar { rect, negative } if !negative && rect.height > IN_BAR_LABEL_MIN_HEIGHT => {
                Some(Point::new(rect.center_x() + 4.0, rect.bottom() - 8.0))
            }
            _ => None,
        }
    }

    pub fn median_point(&self) -> Option<Point> {
        match self {
            Glyph::Box {
                center_x, median_y, ..
            } => Some(Point::new(*center_x, *median_y)),
            Glyph::Bar { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct XLabel {
    pub lines: Vec<String>,
    /// Baseline anchor of the first line, centered under the element.
    pub anchor: Point,
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub size: Size,
    pub plot: Rect,
    pub options: RenderOptions,
    /// `None` for an empty chart.
    pub ticks: Option<Ticks>,
    pub scale: Option<YScale>,
    pub glyphs: Vec<Glyph>,
    pub x_labels: Vec<XLabel>,
    pub hit_map: HitMap,
}

impl ChartLayout {
    pub fn compute(
        model: &ChartModel,
        domain: Option<&AxisDomain>,
        options: &RenderOptions,
    ) -> Self {
        let size = options.logical_size;
        let plot = Rect::new(
            MARGINS.left,
            MARGINS.top,
            (size.width - MARGINS.left - MARGINS.right).max(0.0),
            (size.height - MARGINS.top - MARGINS.bottom).max(0.0),
        );
        let mut layout = Self {
            size,
            plot,
            options: *options,
            ticks: None,
            scale: None,
            glyphs: Vec::new(),
            x_labels: Vec::new(),
            hit_map: HitMap::default(),
        };

        let Some(domain) = domain.filter(|_| !model.is_empty()) else {
            return layout;
        };
        let ticks = domain.ticks(TICK_TARGET);
        let scale = YScale {
            min: ticks.min,
            max: ticks.max,
            top: plot.y,
            bottom: plot.bottom(),
        };
        let band = plot.width / model.len() as f64;

        for index in 0..model.len() {
            let slot = Rect::new(plot.x + band * index as f64, plot.y, band, plot.height);
            let glyph = match model {
                ChartModel::Boxplot(m) => {
                    let stats = &m.series[index];
                    let width = (band * 0.5).min(60.0);
                    let (q3_y, q1_y) = (scale.y(stats.q3), scale.y(stats.q1));
                    Glyph::Box {
                        center_x: slot.center_x(),
                        whisker_top: scale.y(stats.max),
                        whisker_bottom: scale.y(stats.min),
                        body: Rect::new(slot.center_x() - width / 2.0, q3_y, width, q1_y - q3_y),
                        median_y: scale.y(stats.median),
                    }
                }
                ChartModel::Bar(m) => {
                    let width = (band * 0.7).min(80.0);
                    let value = m.values[index];
                    let base = ticks.min.max(0.0);
                    let (top, bottom) = (scale.y(value), scale.y(base));
                    Glyph::Bar {
                        rect: Rect::from_corners(
                            Point::new(slot.center_x() - width / 2.0, top),
                            Point::new(slot.center_x() + width / 2.0, bottom),
                        ),
                        negative: value < base,
                    }
                }
            };
            let lines = match model {
                ChartModel::Boxplot(m) => vec![m.labels[index].clone()],
                ChartModel::Bar(m) => m.labels[index]
                    .lines()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            };
            layout.x_labels.push(XLabel {
                lines,
                anchor: Point::new(slot.center_x(), plot.bottom() + 18.0),
            });
            layout.glyphs.push(glyph);
            layout.hit_map.push(slot, index);
        }

        layout.ticks = Some(ticks);
        layout.scale = Some(scale);
        log::debug!(
            "[WQ] layout: {} glyphs in {}x{}",
            layout.glyphs.len(),
            size.width,
            size.height
        );
        layout
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Points the median trend line passes through, left to right.
    pub fn median_path(&self) -> Vec<Point> {
        self.glyphs.iter().filter_map(Glyph::median_point).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wq_core::config::{ChartKind, PlotConfiguration};
    use wq_core::model;
    use wq_core::record::Record;

    fn records() -> Vec<Record> {
        vec![
            Record::new("Secchi", "A", 2020).with_average(5.0).with_range(3.0, 8.0),
            Record::new("Secchi", "A", 2021).with_average(7.0).with_range(4.0, 9.0),
            Record::new("Secchi", "B", 2021).with_average(-2.0),
        ]
    }

    fn layout_for(kind: ChartKind, sites: &[&str]) -> (ChartModel, ChartLayout) {
        let config = PlotConfiguration::new("Secchi", sites.iter().copied(), kind);
        let chart = model::build(&records(), &config);
        let layout = ChartLayout::compute(&chart, chart.axis_domain().as_ref(), &RenderOptions::default());
        (chart, layout)
    }

    #[test]
    fn scale_maps_bounds_to_plot_edges() {
        let scale = YScale {
            min: 0.0,
            max: 10.0,
            top: 50.0,
            bottom: 350.0,
        };
        assert_eq!(scale.y(0.0), 350.0);
        assert_eq!(scale.y(10.0), 50.0);
        assert_eq!(scale.y(5.0), 200.0);
    }

    #[test]
    fn boxes_are_ordered_top_to_bottom() {
        let (_, layout) = layout_for(ChartKind::Trend, &["A"]);
        assert_eq!(layout.glyphs.len(), 2);
        for glyph in &layout.glyphs {
            let Glyph::Box {
                whisker_top,
                whisker_bottom,
                body,
                median_y,
                ..
            } = glyph
            else {
                panic!("trend layout should contain boxes");
            };
            assert!(whisker_top <= &body.y);
            assert!(body.bottom() <= *whisker_bottom);
            assert!(*median_y >= body.y && *median_y <= body.bottom());
        }
        assert_eq!(layout.median_path().len(), 2);
    }

    #[test]
    fn glyphs_stay_inside_plot() {
        let (_, layout) = layout_for(ChartKind::Comparison, &["A", "B"]);
        for glyph in &layout.glyphs {
            let Glyph::Bar { rect, .. } = glyph else {
                panic!("comparison layout should contain bars");
            };
            assert!(rect.y >= layout.plot.y - 1e-9);
            assert!(rect.bottom() <= layout.plot.bottom() + 1e-9);
        }
    }

    #[test]
    fn negative_bars_hang_from_zero() {
        let (_, layout) = layout_for(ChartKind::Comparison, &["A", "B"]);
        let Glyph::Bar { rect, negative } = &layout.glyphs[1] else {
            panic!("expected a bar");
        };
        assert!(negative);
        let zero = layout.scale.unwrap().y(0.0);
        assert!((rect.y - zero).abs() < 1e-9);
        assert!(layout.glyphs[1].in_bar_label_anchor().is_none());
    }

    #[test]
    fn every_element_has_a_hit_region() {
        let (chart, layout) = layout_for(ChartKind::Comparison, &["A", "B"]);
        assert_eq!(layout.hit_map.len(), chart.len());
        assert_eq!(layout.x_labels.len(), chart.len());
    }

    #[test]
    fn empty_model_has_no_glyphs() {
        let (_, layout) = layout_for(ChartKind::Trend, &["Z"]);
        assert!(layout.is_empty());
        assert!(layout.ticks.is_none());
        assert!(layout.hit_map.is_empty());
    }
}
