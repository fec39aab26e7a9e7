//! Water Quality Box Plots and Site Comparison
//!
//! Two independent plot slots over one set of yearly observation summaries.
//! The filter controls edit a draft configuration; "Update Plot N" copies it
//! into slot N, which then shows either per-year box plots for one site
//! (trend) or mean values per site (comparison).
//!
//! Data flow:
//! 1. `build.rs` copies `observations.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed into records held in `AppState`.
//! 4. Each slot rebuilds its chart model whenever its configuration or the
//!    records change, and paints it onto a canvas once the canvas has a size.

use dioxus::prelude::*;
use wq_chart_ui::components::{
    ChartHeader, ChartTypeSelector, ErrorDisplay, LoadingSpinner, ParameterSelector, PlotSlot,
    SiteSelector, SlotButtons, YearRangePicker,
};
use wq_chart_ui::state::{AppState, SLOT_COUNT};
use wq_core::loader::parse_records;

/// Yearly summaries for every parameter and site.
const OBSERVATIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/observations.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("water-quality-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse embedded observations on mount
    use_effect(move || {
        if OBSERVATIONS_CSV.trim().is_empty() {
            state
                .error_msg
                .set(Some("No observation data was bundled with this build.".to_string()));
            state.loading.set(false);
            return;
        }
        match parse_records(OBSERVATIONS_CSV) {
            Ok(records) => {
                log::info!("[WQ] app: {} records loaded", records.len());
                state.install_records(records);
            }
            Err(e) => {
                log::error!("[WQ] app: failed to parse observations: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load observations: {}", e)));
                state.loading.set(false);
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Water Quality".to_string(),
                subtitle: "Yearly box plots per site, or site means side by side. Hover a box or bar for details.".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-start; margin-bottom: 8px;",
                    div {
                        ParameterSelector {}
                        ChartTypeSelector {}
                        YearRangePicker {}
                    }
                    SiteSelector {}
                }
                SlotButtons {}

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; margin-top: 12px;",
                    for index in 0..SLOT_COUNT {
                        PlotSlot { key: "{index}", index: index }
                    }
                }
            }
        }
    }
}
