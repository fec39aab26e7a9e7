/// Error types for chart building
use thiserror::Error;

/// Reasons a chart could not be built from a configuration.
///
/// None of these reach the user: [`crate::model::build`] turns every one of
/// them into an empty chart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// A trend chart needs at least one selected site to resolve.
    #[error("no sites selected for a trend chart")]
    NoSitesSelected,

    /// The year range excludes every year.
    #[error("start year {start} is after end year {end}")]
    InvertedYearRange { start: i32, end: i32 },

    /// The configuration names no parameter.
    #[error("no parameter selected")]
    NoParameter,
}

/// Type alias for Results using ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
