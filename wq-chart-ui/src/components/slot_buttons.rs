//! Buttons that apply the draft filter to a plot slot.

use crate::state::{AppState, SLOT_COUNT};
use dioxus::prelude::*;

/// One "Update Plot N" button per slot.
#[component]
pub fn SlotButtons() -> Element {
    let state = use_context::<AppState>();
    let disabled = {
        let draft = state.draft.read();
        draft.parameter.trim().is_empty() || draft.selected_sites.is_empty()
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px;",
            for index in 0..SLOT_COUNT {
                button {
                    key: "{index}",
                    disabled: disabled,
                    onclick: move |_| {
                        let mut state = state;
                        state.apply_draft(index);
                    },
                    {format!("Update Plot {}", index + 1)}
                }
            }
        }
    }
}
