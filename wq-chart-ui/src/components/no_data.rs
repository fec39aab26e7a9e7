use dioxus::prelude::*;

/// Neutral placeholder for a slot with nothing to plot.
#[component]
pub fn NoData(message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; min-height: 200px; border: 1px dashed #BDBDBD; border-radius: 4px; color: #757575; font-size: 14px;",
            "{message}"
        }
    }
}
