//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wq_core::catalog;
use wq_core::config::{ChartKind, PlotConfiguration};
use wq_core::record::Record;

/// Number of independent plot slots shown side by side.
pub const SLOT_COUNT: usize = 2;

/// Shared application state for water-quality chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Every loaded observation summary
    pub records: Signal<Vec<Record>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Filter currently being edited in the controls
    pub draft: Signal<PlotConfiguration>,
    /// Configuration applied to each plot slot, `None` until first updated
    pub slots: [Signal<Option<PlotConfiguration>>; SLOT_COUNT],
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            records: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            draft: Signal::new(PlotConfiguration::default()),
            slots: [Signal::new(None), Signal::new(None)],
        }
    }

    /// Store freshly loaded records and point the draft at the first
    /// parameter and site so the first slot has something to show.
    pub fn install_records(&mut self, records: Vec<Record>) {
        let draft = default_draft(&records);
        self.records.set(records);
        if let Some(draft) = draft {
            self.slots[0].set(Some(draft.clone()));
            self.draft.set(draft);
        }
        self.loading.set(false);
    }

    /// Copy the draft filter into slot `index`.
    pub fn apply_draft(&mut self, index: usize) {
        let draft = self.draft.read().clone();
        if let Some(slot) = self.slots.get_mut(index) {
            log::info!(
                "[WQ] state: slot {} <- {} '{}' ({} sites)",
                index + 1,
                draft.chart_type.as_str(),
                draft.parameter,
                draft.selected_sites.len()
            );
            slot.set(Some(draft));
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// First parameter with its first site, as a trend chart.
pub fn default_draft(records: &[Record]) -> Option<PlotConfiguration> {
    let parameter = catalog::parameters(records).into_iter().next()?;
    let sites = catalog::sites_for(records, &parameter);
    let first = sites.into_iter().next()?;
    Some(PlotConfiguration::new(parameter, [first], ChartKind::Trend))
}

/// Sites of `selected` that still exist for the draft's new parameter.
pub fn retain_known_sites(selected: &[String], available: &[String]) -> Vec<String> {
    selected
        .iter()
        .filter(|site| available.contains(site))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_picks_first_parameter_and_site() {
        let records = vec![
            Record::new("pH", "Lake B", 2020),
            Record::new("Secchi", "Lake C", 2020),
            Record::new("Secchi", "Lake A", 2020),
        ];
        let draft = default_draft(&records).unwrap();
        assert_eq!(draft.parameter, "Secchi");
        assert_eq!(draft.selected_sites, vec!["Lake A"]);
        assert_eq!(draft.chart_type, ChartKind::Trend);
        assert!(default_draft(&[]).is_none());
    }

    #[test]
    fn retain_known_sites_keeps_selection_order() {
        let selected = vec!["C".to_string(), "A".to_string(), "Z".to_string()];
        let available = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(retain_known_sites(&selected, &available), vec!["C", "A"]);
    }
}
