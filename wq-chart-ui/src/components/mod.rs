//! Reusable Dioxus RSX components for water-quality chart apps.

mod chart_header;
mod chart_type_selector;
mod error_display;
mod loading_spinner;
mod no_data;
mod parameter_selector;
mod plot_slot;
mod site_selector;
mod slot_buttons;
mod year_range_picker;

pub use chart_header::ChartHeader;
pub use chart_type_selector::ChartTypeSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use no_data::NoData;
pub use parameter_selector::ParameterSelector;
pub use plot_slot::{canvas_id, PlotSlot};
pub use site_selector::SiteSelector;
pub use slot_buttons::SlotButtons;
pub use year_range_picker::{parse_year_input, YearRangePicker};
