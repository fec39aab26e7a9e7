//! Renderer for water-quality chart models.
//!
//! The pipeline for one frame is
//! [`ChartModel`](wq_core::model::ChartModel) →
//! [`layout::ChartLayout::compute`] → [`draw::draw`] onto any
//! [`surface::Surface`]. Layout works in a fixed 800×400 logical space;
//! backends scale to their own pixels.
//!
//! Interaction state is kept separate from painting: [`hit`] maps pointer
//! positions to element indices, [`tooltip`] owns show/hide and overlay
//! placement, and [`readiness`] decides when a freshly mounted chart may
//! draw at all.

pub mod draw;
pub mod geometry;
pub mod hit;
pub mod layout;
pub mod options;
pub mod readiness;
pub mod surface;
pub mod svg;
pub mod tooltip;

pub use draw::draw;
pub use geometry::{Point, Rect, Size};
pub use layout::ChartLayout;
pub use options::RenderOptions;
pub use surface::Surface;
