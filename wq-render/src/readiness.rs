//! Deferred drawing until the host element has a measurable size.
//!
//! A freshly mounted chart often has zero width for a frame or two. The
//! [`ChartLifecycle`] gate holds drawing back until the host reports a real
//! size, polling once per animation frame with a bounded budget. The driver
//! loop lives in the UI crate; this module is the state machine only.

use crate::geometry::Size;
use wq_core::config::ChartKind;
use wq_core::model::ChartModel;

/// Animation frames to wait for layout before giving up on a key.
pub const DEFAULT_RETRY_BUDGET: u32 = 60;

/// What the chart shows. A change means measuring again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderKey {
    pub parameter: String,
    pub kind: ChartKind,
    pub len: usize,
}

impl RenderKey {
    pub fn new(parameter: impl Into<String>, model: &ChartModel) -> Self {
        Self {
            parameter: parameter.into(),
            kind: model.kind(),
            len: model.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Unmounted,
    Measuring {
        key: RenderKey,
        attempts: u32,
    },
    Ready {
        key: RenderKey,
    },
    /// The budget ran out without a measurable size.
    Abandoned {
        key: RenderKey,
    },
}

/// What the driver does after the chart it shows has changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Start a new poll loop for the current generation.
    Measure,
    /// Laid out already; repaint the current chart now.
    Repaint,
    /// A poll loop is running and will paint the current chart.
    Pending,
}

/// Result of one animation-frame poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// Size is known; draw now.
    Draw,
    /// Try again next frame.
    Wait,
    /// Stop polling.
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLifecycle {
    phase: Phase,
    retry_budget: u32,
    /// Bumped whenever a pending poll loop must stop.
    generation: u64,
}

impl Default for ChartLifecycle {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_BUDGET)
    }
}

impl ChartLifecycle {
    pub fn new(retry_budget: u32) -> Self {
        Self {
            phase: Phase::Unmounted,
            retry_budget: retry_budget.max(1),
            generation: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Token identifying the current poll loop. A loop must stop once the
    /// lifecycle's generation no longer matches the one it started with.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready { .. })
    }

    pub fn is_measuring(&self) -> bool {
        matches!(self.phase, Phase::Measuring { .. })
    }

    /// Mount with, or refresh to, `key` after the slot's chart changed.
    ///
    /// Charts with equal keys can still differ in content, so a caller must
    /// always paint the chart that is current when drawing happens, never one
    /// captured before polling started.
    pub fn refresh(&mut self, key: RenderKey) -> Refresh {
        match &self.phase {
            Phase::Ready { key: current } if *current == key => return Refresh::Repaint,
            Phase::Measuring { key: current, .. } if *current == key => return Refresh::Pending,
            _ => {}
        }
        log::debug!(
            "[WQ] readiness: measuring {} '{}' ({} elements)",
            key.kind.as_str(),
            key.parameter,
            key.len
        );
        self.generation += 1;
        self.phase = Phase::Measuring { key, attempts: 0 };
        Refresh::Measure
    }

    /// Feed one measurement of the host element.
    pub fn poll(&mut self, generation: u64, measured: Size) -> Poll {
        if generation != self.generation {
            return Poll::Stop;
        }
        let Phase::Measuring { key, attempts } = &mut self.phase else {
            return Poll::Stop;
        };
        if measured.is_measurable() {
            let key = key.clone();
            self.phase = Phase::Ready { key };
            return Poll::Draw;
        }
        *attempts += 1;
        if *attempts >= self.retry_budget {
            log::warn!(
                "[WQ] readiness: no layout for '{}' after {} frames",
                key.parameter,
                attempts
            );
            let key = key.clone();
            self.phase = Phase::Abandoned { key };
            return Poll::Stop;
        }
        Poll::Wait
    }

    /// Cancel any pending poll loop and forget the key.
    pub fn unmount(&mut self) {
        self.generation += 1;
        self.phase = Phase::Unmounted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(len: usize) -> RenderKey {
        RenderKey {
            parameter: "Secchi".into(),
            kind: ChartKind::Trend,
            len,
        }
    }

    const VISIBLE: Size = Size::new(640.0, 320.0);

    #[test]
    fn measures_until_size_is_known() {
        let mut gate = ChartLifecycle::new(5);
        assert_eq!(gate.refresh(key(3)), Refresh::Measure);
        let generation = gate.generation();
        assert_eq!(gate.poll(generation, Size::ZERO), Poll::Wait);
        assert!(!gate.is_ready());
        assert_eq!(gate.poll(generation, VISIBLE), Poll::Draw);
        assert!(gate.is_ready());
        assert_eq!(gate.poll(generation, VISIBLE), Poll::Stop);
    }

    #[test]
    fn same_key_repaints_without_remeasuring() {
        let mut gate = ChartLifecycle::default();
        gate.refresh(key(3));
        let generation = gate.generation();
        gate.poll(generation, VISIBLE);
        assert_eq!(gate.refresh(key(3)), Refresh::Repaint);
        assert!(gate.is_ready());
        assert_eq!(gate.generation(), generation);
    }

    #[test]
    fn same_key_while_measuring_keeps_the_pending_loop() {
        let mut gate = ChartLifecycle::default();
        gate.refresh(key(3));
        let generation = gate.generation();
        assert_eq!(gate.poll(generation, Size::ZERO), Poll::Wait);
        assert_eq!(gate.refresh(key(3)), Refresh::Pending);
        assert_eq!(gate.generation(), generation);
        assert_eq!(gate.poll(generation, VISIBLE), Poll::Draw);
    }

    #[test]
    fn same_key_after_abandoning_measures_again() {
        let mut gate = ChartLifecycle::new(1);
        gate.refresh(key(2));
        let old = gate.generation();
        assert_eq!(gate.poll(old, Size::ZERO), Poll::Stop);
        assert_eq!(gate.phase(), &Phase::Abandoned { key: key(2) });
        assert_eq!(gate.refresh(key(2)), Refresh::Measure);
        assert!(gate.is_measuring());
        assert_eq!(gate.poll(old, VISIBLE), Poll::Stop);
        assert_eq!(gate.poll(gate.generation(), VISIBLE), Poll::Draw);
    }

    #[test]
    fn stepping_between_sites_with_equal_year_counts_keeps_the_key() {
        use wq_core::config::PlotConfiguration;
        use wq_core::model;
        use wq_core::record::Record;

        let records = vec![
            Record::new("Secchi", "A", 2020).with_average(1.5),
            Record::new("Secchi", "B", 2020).with_average(4.25),
        ];
        let first = PlotConfiguration::new("Secchi", ["A", "B"], ChartKind::Trend)
            .with_trend_site_index(0);
        let second = first.next_site();
        let a = model::build(&records, &first);
        let b = model::build(&records, &second);
        assert_ne!(a, b);

        let mut gate = ChartLifecycle::default();
        gate.refresh(RenderKey::new("Secchi", &a));
        gate.poll(gate.generation(), VISIBLE);
        assert_eq!(gate.refresh(RenderKey::new("Secchi", &b)), Refresh::Repaint);
    }

    #[test]
    fn key_change_reenters_measuring() {
        let mut gate = ChartLifecycle::default();
        gate.refresh(key(3));
        let old = gate.generation();
        gate.poll(old, VISIBLE);
        assert_eq!(gate.refresh(key(4)), Refresh::Measure);
        assert!(gate.is_measuring());
        assert_eq!(gate.poll(old, VISIBLE), Poll::Stop);
        assert_eq!(gate.poll(gate.generation(), VISIBLE), Poll::Draw);
    }

    #[test]
    fn retries_are_bounded() {
        let mut gate = ChartLifecycle::new(3);
        gate.refresh(key(1));
        let generation = gate.generation();
        assert_eq!(gate.poll(generation, Size::ZERO), Poll::Wait);
        assert_eq!(gate.poll(generation, Size::ZERO), Poll::Wait);
        assert_eq!(gate.poll(generation, Size::ZERO), Poll::Stop);
        assert_eq!(gate.phase(), &Phase::Abandoned { key: key(1) });
    }

    #[test]
    fn unmount_cancels_polling() {
        let mut gate = ChartLifecycle::default();
        gate.refresh(key(2));
        let generation = gate.generation();
        gate.unmount();
        assert_eq!(gate.poll(generation, VISIBLE), Poll::Stop);
        assert_eq!(gate.phase(), &Phase::Unmounted);
        assert_eq!(gate.refresh(key(2)), Refresh::Measure);
    }
}
