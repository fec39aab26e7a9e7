//! Chart header component with slot title and a short description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Slot title, e.g. "Plot 1"
    pub title: String,
    /// What the slot is showing, e.g. "Trend: site 2 of 3"
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header above a plot slot.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
