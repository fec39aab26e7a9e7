//! Dropdown selector for choosing a measured parameter.

use crate::state::{retain_known_sites, AppState};
use dioxus::prelude::*;
use wq_core::catalog;

/// Parameter dropdown selector.
/// Reads available parameters from the loaded records and updates the draft
/// filter on change, dropping sites that never measured the new parameter.
#[component]
pub fn ParameterSelector() -> Element {
    let mut state = use_context::<AppState>();
    let parameters = catalog::parameters(&state.records.read());
    let selected = state.draft.read().parameter.clone();

    let on_change = move |evt: Event<FormData>| {
        let parameter = evt.value();
        let available = catalog::sites_for(&state.records.read(), &parameter);
        let mut draft = state.draft.write();
        draft.selected_sites = retain_known_sites(&draft.selected_sites, &available);
        draft.trend_site_index = None;
        draft.parameter = parameter;
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "parameter-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Parameter: "
            }
            select {
                id: "parameter-select",
                onchange: on_change,
                for parameter in parameters.iter() {
                    option {
                        value: "{parameter}",
                        selected: *parameter == selected,
                        "{parameter}"
                    }
                }
            }
        }
    }
}
