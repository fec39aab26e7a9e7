//! Chart type selector.

use crate::state::AppState;
use dioxus::prelude::*;
use wq_core::config::ChartKind;

/// Dropdown selector for trend or comparison charts.
#[component]
pub fn ChartTypeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = state.draft.read().chart_type;

    let on_change = move |evt: Event<FormData>| {
        match evt.value().parse::<ChartKind>() {
            Ok(kind) => state.draft.write().chart_type = kind,
            Err(e) => log::warn!("[WQ] chart type: {e}"),
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Chart: "
                select {
                    onchange: on_change,
                    option {
                        value: "trend",
                        selected: current == ChartKind::Trend,
                        "Trend (one site by year)"
                    }
                    option {
                        value: "comparison",
                        selected: current == ChartKind::Comparison,
                        "Comparison (sites side by side)"
                    }
                }
            }
        }
    }
}
