//! Shared Dioxus components and canvas bridge for water-quality chart apps.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `canvas`: a `wq_render::Surface` over `CanvasRenderingContext2d`
//! - `frame`: animation-frame awaiting for the readiness gate
//! - `download`: browser-side CSV downloads
//! - `components`: Reusable RSX components (selectors, plot slots, etc.)

pub mod canvas;
pub mod components;
pub mod download;
pub mod frame;
pub mod state;
