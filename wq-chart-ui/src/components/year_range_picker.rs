//! Year range picker with optional start and end years.

use crate::state::AppState;
use dioxus::prelude::*;
use wq_core::catalog;

/// Parse a year input; blank or invalid text means "no constraint".
pub fn parse_year_input(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

/// Year range picker for filtering chart data.
#[component]
pub fn YearRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let draft = state.draft.read().clone();
    let extent = catalog::year_extent(&state.records.read(), &draft.parameter);
    let (first, last) = extent.map_or((String::new(), String::new()), |(a, b)| {
        (a.to_string(), b.to_string())
    });
    let start = draft.start_year.map(|y| y.to_string()).unwrap_or_default();
    let end = draft.end_year.map(|y| y.to_string()).unwrap_or_default();

    let on_start_change = move |evt: Event<FormData>| {
        state.draft.write().start_year = parse_year_input(&evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.draft.write().end_year = parse_year_input(&evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "number",
                    value: "{start}",
                    placeholder: "{first}",
                    style: "width: 80px;",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "number",
                    value: "{end}",
                    placeholder: "{last}",
                    style: "width: 80px;",
                    onchange: on_end_change,
                }
            }
        }
    }
}
