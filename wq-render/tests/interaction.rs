use proptest::prelude::*;
use wq_core::config::{ChartKind, PlotConfiguration};
use wq_core::model::{self, ChartModel};
use wq_core::record::Record;
use wq_render::hit::Viewport;
use wq_render::layout::Glyph;
use wq_render::tooltip::{place_overlay, TooltipContent, TooltipController, TooltipState};
use wq_render::{ChartLayout, Point, Rect, RenderOptions, Size};

fn chart() -> ChartModel {
    let records = vec![
        Record::new("Secchi", "A", 2019).with_average(4.0).with_count(2.0),
        Record::new("Secchi", "A", 2020).with_average(5.0).with_count(3.0),
        Record::new("Secchi", "A", 2021).with_average(7.0),
    ];
    model::build(&records, &PlotConfiguration::new("Secchi", ["A"], ChartKind::Trend))
}

#[test]
fn hovering_a_scrolled_chart_shows_the_right_year() {
    let chart = chart();
    let layout = ChartLayout::compute(&chart, chart.axis_domain().as_ref(), &RenderOptions::default());
    // Shown at 400x200 CSS pixels, 300px down the page after scrolling.
    let viewport = Viewport::new(Rect::new(20.0, 300.0, 400.0, 200.0), layout.size);

    let middle = layout.glyphs[1].center_x();
    let client = viewport.to_client(Point::new(middle, layout.plot.center().y));
    let logical = viewport.to_logical(client.x, client.y).unwrap();
    let index = layout.hit_map.hit_test(logical).unwrap();
    assert_eq!(index, 1);

    let mut tooltip = TooltipController::new();
    tooltip.pointer_moved(client, TooltipContent::for_index(&chart, index));
    let TooltipState::Visible { content, pointer } = tooltip.state() else {
        panic!("tooltip should be visible over an element");
    };
    assert_eq!(content.title, "2020");
    assert!(content.lines.contains(&"Count: 3".to_string()));

    let placed = place_overlay(*pointer, Size::new(120.0, 90.0), Size::new(1024.0, 768.0));
    assert!(placed.frame.bottom() <= pointer.y);
    assert!(placed.frame.y >= 8.0);

    assert!(tooltip.pointer_left());
}

#[test]
fn pointer_in_margins_hits_nothing() {
    let chart = chart();
    let layout = ChartLayout::compute(&chart, chart.axis_domain().as_ref(), &RenderOptions::default());
    assert_eq!(layout.hit_map.hit_test(Point::new(10.0, 200.0)), None);
    assert_eq!(layout.hit_map.hit_test(Point::new(400.0, 10.0)), None);
}

proptest! {
    #[test]
    fn bars_fit_inside_the_plot(values in proptest::collection::vec(-500.0f64..500.0, 1..8)) {
        let sites: Vec<String> = (0..values.len()).map(|i| format!("Site {i}")).collect();
        let records: Vec<Record> = values
            .iter()
            .zip(&sites)
            .map(|(v, site)| Record::new("pH", site.as_str(), 2020).with_average(*v))
            .collect();
        let chart = model::build(&records, &PlotConfiguration::new("pH", sites.clone(), ChartKind::Comparison));
        let layout = ChartLayout::compute(&chart, chart.axis_domain().as_ref(), &RenderOptions::default());
        prop_assert_eq!(layout.glyphs.len(), values.len());
        for (index, glyph) in layout.glyphs.iter().enumerate() {
            let Glyph::Bar { rect, .. } = glyph else {
                panic!("comparison layout should contain bars");
            };
            prop_assert!(rect.y >= layout.plot.y - 1e-6);
            prop_assert!(rect.bottom() <= layout.plot.bottom() + 1e-6);
            let probe = Point::new(glyph.center_x(), layout.plot.center().y);
            prop_assert_eq!(layout.hit_map.hit_test(probe), Some(index));
        }
    }
}
