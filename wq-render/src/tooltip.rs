//! Hover tooltip state and overlay placement.
//!
//! The overlay is positioned in viewport coordinates rather than inside the
//! chart's own box, so it is never clipped by the chart container.

use crate::geometry::{Point, Rect, Size};
use wq_core::model::ChartModel;
use wq_core::rounding::round3;

/// Minimum distance between the overlay and the top of the viewport.
pub const TOP_CLEARANCE: f64 = 8.0;

/// Height of the arrow below the overlay.
pub const ARROW_HEIGHT: f64 = 8.0;
const ARROW_HALF_WIDTH: f64 = 6.0;

/// Chart number formatting: three decimals at most, no trailing zeros.
pub fn format_value(value: f64) -> String {
    format!("{}", round3(value))
}

/// Text shown for one hovered element.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<String>,
}

impl TooltipContent {
    /// Content for element `index`, `None` when out of range.
    pub fn for_index(model: &ChartModel, index: usize) -> Option<Self> {
        let title = model.label_text(index)?;
        let mut lines = match model {
            ChartModel::Boxplot(m) => {
                let stats = m.series.get(index)?;
                let mut lines = vec![
                    format!("Max: {}", format_value(stats.max)),
                    format!("Q3: {}", format_value(stats.q3)),
                    format!("Median: {}", format_value(stats.median)),
                    format!("Q1: {}", format_value(stats.q1)),
                    format!("Min: {}", format_value(stats.min)),
                ];
                if let Some(mean) = stats.mean {
                    lines.push(format!("Mean: {}", format_value(mean)));
                }
                lines
            }
            ChartModel::Bar(m) => vec![format!("Mean: {}", format_value(*m.values.get(index)?))],
        };
        if let Some(Some(count)) = model.counts().get(index) {
            lines.push(format!("Count: {count}"));
        }
        Some(Self { title, lines })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible {
        content: TooltipContent,
        /// Pointer in viewport coordinates.
        pointer: Point,
    },
}

/// Show/hide logic for one chart's tooltip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipController {
    state: TooltipState,
}

impl TooltipController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    /// Follow the pointer. `hit` is the content under it, if any.
    /// Returns true when the visible state changed.
    pub fn pointer_moved(&mut self, pointer: Point, hit: Option<TooltipContent>) -> bool {
        let next = match hit {
            Some(content) => TooltipState::Visible { content, pointer },
            None => TooltipState::Hidden,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }

    pub fn pointer_left(&mut self) -> bool {
        self.hide()
    }

    /// The chart is going away; nothing may stay on screen.
    pub fn unmount(&mut self) -> bool {
        self.hide()
    }

    fn hide(&mut self) -> bool {
        let was_visible = self.is_visible();
        self.state = TooltipState::Hidden;
        was_visible
    }
}

/// Where to draw the overlay box and its arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPlacement {
    pub frame: Rect,
    /// Left base, right base, tip.
    pub arrow: [Point; 3],
}

/// Anchor an overlay of `overlay` size above `pointer`, kept inside a
/// viewport of `viewport` size.
pub fn place_overlay(pointer: Point, overlay: Size, viewport: Size) -> OverlayPlacement {
    let max_left = (viewport.width - overlay.width).max(0.0);
    let left = (pointer.x - overlay.width / 2.0).clamp(0.0, max_left);
    let top = (pointer.y - overlay.height - ARROW_HEIGHT).max(TOP_CLEARANCE);
    let frame = Rect::new(left, top, overlay.width, overlay.height);

    let base_y = frame.bottom();
    let min_x = frame.x + ARROW_HALF_WIDTH;
    let max_x = (frame.right() - ARROW_HALF_WIDTH).max(min_x);
    let tip_x = pointer.x.clamp(min_x, max_x);
    OverlayPlacement {
        frame,
        arrow: [
            Point::new(tip_x - ARROW_HALF_WIDTH, base_y),
            Point::new(tip_x + ARROW_HALF_WIDTH, base_y),
            Point::new(tip_x, base_y + ARROW_HEIGHT),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wq_core::config::{ChartKind, PlotConfiguration};
    use wq_core::model;
    use wq_core::record::Record;

    fn chart(kind: ChartKind) -> ChartModel {
        let records = vec![
            Record::new("Secchi", "A", 2020)
                .with_average(5.0)
                .with_range(3.25, 6.5)
                .with_count(3.0),
            Record::new("Secchi", "B", 2020).with_average(4.0),
        ];
        model::build(&records, &PlotConfiguration::new("Secchi", ["B", "A"], kind))
    }

    #[test]
    fn box_content_lists_statistics_top_down() {
        let content = TooltipContent::for_index(&chart(ChartKind::Trend), 0).unwrap();
        assert_eq!(content.title, "2020");
        assert_eq!(
            content.lines,
            vec!["Max: 6.5", "Q3: 5", "Median: 5", "Q1: 5", "Min: 3.25", "Mean: 5", "Count: 3"]
        );
    }

    #[test]
    fn bar_content_omits_missing_count() {
        let chart = chart(ChartKind::Comparison);
        let first = TooltipContent::for_index(&chart, 0).unwrap();
        assert_eq!(first.title, "B");
        assert_eq!(first.lines, vec!["Mean: 4"]);
        let second = TooltipContent::for_index(&chart, 1).unwrap();
        assert_eq!(second.lines, vec!["Mean: 5", "Count: 3"]);
        assert!(TooltipContent::for_index(&chart, 2).is_none());
    }

    #[test]
    fn controller_follows_pointer_and_hides() {
        let content = TooltipContent {
            title: "A".into(),
            lines: vec![],
        };
        let mut tooltip = TooltipController::new();
        assert!(tooltip.pointer_moved(Point::new(1.0, 1.0), Some(content.clone())));
        assert!(tooltip.pointer_moved(Point::new(2.0, 1.0), Some(content.clone())));
        assert!(!tooltip.pointer_moved(Point::new(2.0, 1.0), Some(content)));
        assert!(tooltip.pointer_left());
        assert!(!tooltip.is_visible());
        assert!(!tooltip.pointer_left());
    }

    #[test]
    fn moving_off_every_element_hides() {
        let mut tooltip = TooltipController::new();
        let content = TooltipContent {
            title: "A".into(),
            lines: vec![],
        };
        tooltip.pointer_moved(Point::new(1.0, 1.0), Some(content));
        assert!(tooltip.pointer_moved(Point::new(900.0, 1.0), None));
        assert_eq!(tooltip.state(), &TooltipState::Hidden);
    }

    #[test]
    fn unmount_hides() {
        let mut tooltip = TooltipController::new();
        tooltip.pointer_moved(
            Point::new(1.0, 1.0),
            Some(TooltipContent {
                title: "A".into(),
                lines: vec![],
            }),
        );
        assert!(tooltip.unmount());
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn overlay_sits_above_pointer() {
        let placed = place_overlay(
            Point::new(400.0, 300.0),
            Size::new(100.0, 60.0),
            Size::new(1000.0, 800.0),
        );
        assert_eq!(placed.frame, Rect::new(350.0, 232.0, 100.0, 60.0));
        assert_eq!(placed.arrow[2], Point::new(400.0, 300.0));
    }

    #[test]
    fn overlay_is_clamped_into_viewport() {
        let viewport = Size::new(500.0, 400.0);
        let near_top = place_overlay(Point::new(480.0, 20.0), Size::new(100.0, 60.0), viewport);
        assert_eq!(near_top.frame.y, TOP_CLEARANCE);
        assert_eq!(near_top.frame.x, 400.0);
        assert!(near_top.arrow[2].x <= near_top.frame.right());

        let near_left = place_overlay(Point::new(5.0, 200.0), Size::new(100.0, 60.0), viewport);
        assert_eq!(near_left.frame.x, 0.0);
    }

    #[test]
    fn values_are_formatted_without_trailing_zeros() {
        assert_eq!(format_value(6.0), "6");
        assert_eq!(format_value(1.0625), "1.063");
        assert_eq!(format_value(-0.0001), "0");
    }
}
