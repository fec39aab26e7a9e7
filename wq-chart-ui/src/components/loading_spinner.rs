//! Loading indicator shown while observations are parsed.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(default = "Loading observations...".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{message}"
        }
    }
}
