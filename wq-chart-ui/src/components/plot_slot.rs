//! One plot slot: canvas chart, hover tooltip, site navigation and download.
//!
//! Drawing waits on the readiness gate: when the slot's [`RenderKey`]
//! changes, a task polls the canvas size once per animation frame and
//! paints the slot's current chart as soon as the canvas has a real size.
//! Unmounting cancels it.

use crate::canvas::{canvas_by_id, client_rect, window_size, CanvasSurface};
use crate::components::{ChartHeader, ErrorDisplay, NoData};
use crate::download::download_csv;
use crate::frame::next_animation_frame;
use crate::state::AppState;
use dioxus::prelude::*;
use wq_core::config::{ChartKind, PlotConfiguration};
use wq_core::export::{export_csv, export_file_name};
use wq_core::model::{self, ChartModel};
use wq_render::hit::Viewport;
use wq_render::readiness::{ChartLifecycle, Poll, Refresh, RenderKey};
use wq_render::tooltip::{place_overlay, TooltipContent, TooltipController, TooltipState};
use wq_render::{draw, ChartLayout, Point, RenderOptions, Size};

const TOOLTIP_WIDTH: f64 = 170.0;
const TOOLTIP_LINE_HEIGHT: f64 = 17.0;
const TOOLTIP_BACKGROUND: &str = "rgba(33, 33, 33, 0.92)";

type SlotSignal = Signal<Option<PlotConfiguration>>;

/// DOM id of slot `index`'s canvas.
pub fn canvas_id(index: usize) -> String {
    format!("wq-plot-{index}")
}

/// Overlay size for `content`: one line per statistic plus the title.
pub fn tooltip_size(content: &TooltipContent) -> Size {
    Size::new(
        TOOLTIP_WIDTH,
        16.0 + TOOLTIP_LINE_HEIGHT * (content.lines.len() + 1) as f64,
    )
}

/// Short description of what a slot shows.
pub fn describe(config: &PlotConfiguration) -> String {
    match config.chart_type {
        ChartKind::Trend => match config.resolved_trend_index() {
            Some(i) => format!("Trend: site {} of {}", i + 1, config.selected_sites.len()),
            None => "Trend: no site selected".to_string(),
        },
        ChartKind::Comparison => format!("Comparison: {} sites", config.selected_sites.len()),
    }
}

fn paint(id: &str, model: &ChartModel, options: &RenderOptions) -> Option<ChartLayout> {
    let canvas = canvas_by_id(id)?;
    let mut surface = match CanvasSurface::attach(&canvas, options.logical_size) {
        Ok(surface) => surface,
        Err(e) => {
            log::error!("[WQ] slot: canvas {} unavailable: {:?}", id, e);
            return None;
        }
    };
    let layout = ChartLayout::compute(model, model.axis_domain().as_ref(), options);
    draw(&layout, model, &mut surface);
    log::debug!("[WQ] slot: painted {} ({} elements)", id, model.len());
    Some(layout)
}

fn step_site(slot: Option<SlotSignal>, forward: bool) {
    let Some(mut slot) = slot else {
        return;
    };
    let next = slot.peek().as_ref().map(|config| {
        if forward {
            config.next_site()
        } else {
            config.previous_site()
        }
    });
    if next.is_some() {
        slot.set(next);
    }
}

#[component]
pub fn PlotSlot(index: usize) -> Element {
    let state = use_context::<AppState>();
    let slot = state.slots.get(index).copied();
    let id = canvas_id(index);
    let options = RenderOptions::default();

    let mut lifecycle = use_signal(ChartLifecycle::default);
    let mut layout = use_signal(|| None::<ChartLayout>);
    let mut tooltip = use_signal(TooltipController::new);
    let mut download_error = use_signal(|| None::<String>);

    let chart = use_memo(move || {
        let config = slot.and_then(|s| s())?;
        let model = model::build(&state.records.read(), &config);
        Some((config, model))
    });

    let effect_id = id.clone();
    use_effect(move || {
        let Some((config, model)) = chart() else {
            lifecycle.write().unmount();
            layout.set(None);
            return;
        };
        let key = RenderKey::new(config.parameter.clone(), &model);
        let refresh = lifecycle.write().refresh(key);
        match refresh {
            Refresh::Repaint => layout.set(paint(&effect_id, &model, &options)),
            Refresh::Pending => {}
            Refresh::Measure => {
                let generation = lifecycle.peek().generation();
                let id = effect_id.clone();
                spawn(async move {
                    loop {
                        next_animation_frame().await;
                        let measured = client_rect(&id).map_or(Size::ZERO, |r| r.size());
                        let poll = lifecycle.write().poll(generation, measured);
                        match poll {
                            Poll::Draw => {
                                let painted = chart
                                    .peek()
                                    .as_ref()
                                    .and_then(|(_, current)| paint(&id, current, &options));
                                layout.set(painted);
                                break;
                            }
                            Poll::Wait => continue,
                            Poll::Stop => break,
                        }
                    }
                });
            }
        }
    });

    use_drop(move || {
        if let Ok(mut gate) = lifecycle.try_write() {
            gate.unmount();
        }
        if let Ok(mut tip) = tooltip.try_write() {
            tip.unmount();
        }
    });

    let hover_id = id.clone();
    let on_mouse_move = move |evt: Event<MouseData>| {
        let client = evt.client_coordinates();
        let pointer = Point::new(client.x, client.y);
        let hit = {
            let layout = layout.read();
            let chart = chart.read();
            match (layout.as_ref(), chart.as_ref(), client_rect(&hover_id)) {
                (Some(layout), Some((_, model)), Some(rect)) => Viewport::new(rect, layout.size)
                    .to_logical(pointer.x, pointer.y)
                    .and_then(|logical| layout.hit_map.hit_test(logical))
                    .and_then(|i| TooltipContent::for_index(model, i)),
                _ => None,
            }
        };
        let mut next = tooltip.peek().clone();
        if next.pointer_moved(pointer, hit) {
            tooltip.set(next);
        }
    };

    let on_mouse_leave = move |_: Event<MouseData>| {
        let mut next = tooltip.peek().clone();
        if next.pointer_left() {
            tooltip.set(next);
        }
    };

    let on_download = move |_: Event<MouseData>| {
        let Some((config, _)) = chart() else {
            return;
        };
        let result = export_csv(&state.records.read(), &config)
            .map_err(|e| e.to_string())
            .and_then(|csv| {
                download_csv(&export_file_name(&config), &csv).map_err(|e| format!("{e:?}"))
            });
        match result {
            Ok(()) => download_error.set(None),
            Err(e) => {
                log::error!("[WQ] slot: download failed: {}", e);
                download_error.set(Some(e));
            }
        }
    };

    let title = format!("Plot {}", index + 1);
    let Some((config, _)) = chart() else {
        return rsx! {
            div {
                style: "flex: 1 1 420px; min-width: 320px;",
                ChartHeader { title: title }
                NoData { message: format!("Choose filters and press Update Plot {}.", index + 1) }
            }
        };
    };

    let navigable = config.chart_type == ChartKind::Trend && config.selected_sites.len() > 1;
    let overlay = match tooltip.read().state() {
        TooltipState::Visible { content, pointer } => {
            let placed = place_overlay(*pointer, tooltip_size(content), window_size());
            let frame = placed.frame;
            let style = format!(
                "position: fixed; left: {}px; top: {}px; width: {}px; height: {}px; pointer-events: none; z-index: 1000; background: {}; color: #fff; border-radius: 4px; padding: 8px; font-size: 12px; line-height: {}px; box-sizing: border-box;",
                frame.x, frame.y, frame.width, frame.height, TOOLTIP_BACKGROUND, TOOLTIP_LINE_HEIGHT
            );
            let arrow = placed
                .arrow
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            Some((content.clone(), style, arrow))
        }
        TooltipState::Hidden => None,
    };

    rsx! {
        div {
            style: "flex: 1 1 420px; min-width: 320px;",
            ChartHeader { title: title, subtitle: describe(&config) }
            canvas {
                id: "{id}",
                style: "width: 100%; aspect-ratio: 2 / 1; display: block; border: 1px solid #E0E0E0; border-radius: 4px;",
                onmousemove: on_mouse_move,
                onmouseleave: on_mouse_leave,
            }
            div {
                style: "margin-top: 8px; display: flex; gap: 8px; align-items: center;",
                if navigable {
                    button { onclick: move |_| step_site(slot, false), "< Previous site" }
                    button { onclick: move |_| step_site(slot, true), "Next site >" }
                }
                button { onclick: on_download, "Download CSV" }
            }
            if let Some(message) = download_error() {
                ErrorDisplay { heading: "Download failed".to_string(), message: message }
            }
            if let Some((content, style, arrow)) = overlay {
                div {
                    style: "{style}",
                    strong { "{content.title}" }
                    for line in content.lines.iter() {
                        div { "{line}" }
                    }
                }
                svg {
                    style: "position: fixed; left: 0; top: 0; width: 100vw; height: 100vh; pointer-events: none; z-index: 1000; overflow: visible;",
                    polygon { points: "{arrow}", fill: TOOLTIP_BACKGROUND }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_ids_are_per_slot() {
        assert_eq!(canvas_id(0), "wq-plot-0");
        assert_ne!(canvas_id(0), canvas_id(1));
    }

    #[test]
    fn tooltip_grows_with_lines() {
        let short = TooltipContent {
            title: "A".into(),
            lines: vec!["Mean: 1".into()],
        };
        let long = TooltipContent {
            title: "2020".into(),
            lines: vec!["x".into(); 7],
        };
        assert!(tooltip_size(&long).height > tooltip_size(&short).height);
        assert_eq!(tooltip_size(&short).width, TOOLTIP_WIDTH);
    }

    #[test]
    fn describes_trend_position() {
        let config = PlotConfiguration::new("Secchi", ["A", "B", "C"], ChartKind::Trend)
            .with_trend_site_index(-2);
        assert_eq!(describe(&config), "Trend: site 2 of 3");
        let config = PlotConfiguration::new("Secchi", ["A", "B"], ChartKind::Comparison);
        assert_eq!(describe(&config), "Comparison: 2 sites");
    }
}
