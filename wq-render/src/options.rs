use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Logical chart width. Backends scale this to device pixels.
pub const LOGICAL_WIDTH: f64 = 800.0;
pub const LOGICAL_HEIGHT: f64 = 400.0;

/// Renderer switches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Draw `n=` labels above each element that carries a count.
    pub show_counts: bool,
    /// Connect box plot medians with a line.
    pub show_median_line: bool,
    pub logical_size: Size,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_counts: true,
            show_median_line: true,
            logical_size: Size::new(LOGICAL_WIDTH, LOGICAL_HEIGHT),
        }
    }
}
