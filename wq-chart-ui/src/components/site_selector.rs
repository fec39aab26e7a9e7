//! Checkbox list for choosing sites.

use crate::state::AppState;
use dioxus::prelude::*;
use wq_core::catalog;

/// Site checkboxes for the draft parameter.
///
/// Newly checked sites are appended, so the most recent pick becomes the
/// default trend site.
#[component]
pub fn SiteSelector() -> Element {
    let state = use_context::<AppState>();
    let draft = state.draft.read().clone();
    let sites = catalog::sites_for(&state.records.read(), &draft.parameter);

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: 1px solid #E0E0E0; border-radius: 4px; max-height: 160px; overflow-y: auto;",
            legend { style: "font-weight: bold;", "Sites" }
            if sites.is_empty() {
                span { style: "color: #666; font-size: 12px;", "No sites for this parameter" }
            }
            for site in sites {
                SiteCheckbox {
                    key: "{site}",
                    checked: draft.selected_sites.contains(&site),
                    site: site.clone(),
                }
            }
        }
    }
}

#[component]
fn SiteCheckbox(site: String, checked: bool) -> Element {
    let mut state = use_context::<AppState>();
    let toggled = site.clone();

    let on_change = move |evt: Event<FormData>| {
        let mut draft = state.draft.write();
        draft.selected_sites.retain(|s| *s != toggled);
        if evt.checked() {
            draft.selected_sites.push(toggled.clone());
        }
        draft.trend_site_index = None;
    };

    rsx! {
        label {
            style: "display: block; font-size: 13px;",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: on_change,
            }
            " {site}"
        }
    }
}
