//! Chart engine for tabular water-quality observations.
//!
//! Records flow one way through this crate:
//!
//! 1. [`filter`] selects the rows matching a [`config::PlotConfiguration`].
//! 2. [`aggregate`] groups them by year (trend) or by site (comparison).
//! 3. [`stats`] reduces each group to a five-number summary.
//! 4. [`model`] composes the result into a renderer-agnostic [`model::ChartModel`].
//! 5. [`axis`] derives the padded value domain the renderer maps to pixels.
//!
//! Everything here is synchronous and side-effect free. Loading CSV text
//! ([`loader`]) and writing the matching download ([`export`]) sit at the
//! boundary and perform no I/O of their own.
//!
//! # Example
//!
//! ```rust
//! use wq_core::config::{ChartKind, PlotConfiguration};
//! use wq_core::model;
//! use wq_core::record::Record;
//!
//! let records = vec![
//!     Record::new("Secchi", "A", 2020).with_average(5.0).with_count(3.0),
//!     Record::new("Secchi", "A", 2021).with_average(7.0).with_count(2.0),
//! ];
//! let config = PlotConfiguration::new("Secchi", ["A"], ChartKind::Comparison);
//! let chart = model::build(&records, &config);
//! assert_eq!(chart.len(), 1);
//! ```

pub mod aggregate;
pub mod axis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod labels;
pub mod loader;
pub mod model;
pub mod record;
pub mod rounding;
pub mod stats;
