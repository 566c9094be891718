use std::ops::RangeInclusive;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{
    Arrows, Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Plot, PlotPoint, PlotPoints,
    Text,
};

use crate::state::{AppState, ANALYZED_STAT};
use crate::stats::HistBin;

const CHART_HEIGHT: f32 = 280.0;
const BAR_COLOR: Color32 = Color32::LIGHT_BLUE;
const MARKER_COLOR: Color32 = Color32::RED;

fn histogram_bars(bins: &[HistBin]) -> BarChart {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width())
                .fill(BAR_COLOR)
        })
        .collect();
    BarChart::new(bars)
}

/// Tick formatter that prints a category label at each integer mark.
fn category_labels(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 0.05 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// (a) Attack histogram
// ---------------------------------------------------------------------------

pub fn attack_histogram(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else { return };
    if state.attack_histogram.is_empty() {
        return;
    }

    ui.heading(format!(
        "ポケモン{}体の「{}」のヒストグラム",
        dataset.len(),
        ANALYZED_STAT.label()
    ));
    Plot::new("attack_histogram")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label(ANALYZED_STAT.label())
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(histogram_bars(&state.attack_histogram));
        });
}

// ---------------------------------------------------------------------------
// (b) Attack histogram annotated with population mean / std
// ---------------------------------------------------------------------------

pub fn annotated_histogram(ui: &mut Ui, state: &AppState) {
    let Some(summary) = state.summary else { return };
    if state.attack_histogram.is_empty() {
        return;
    }

    let ymax = state
        .attack_histogram
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0) as f64;

    ui.heading(format!("「{}」の母平均と母標準偏差", ANALYZED_STAT.label()));
    Plot::new("attack_annotated")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label(ANALYZED_STAT.label())
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(histogram_bars(&state.attack_histogram));

            // Population mean: vertical arrow down to the axis.
            plot_ui.arrows(
                Arrows::new(
                    PlotPoints::from(vec![[summary.mean, ymax]]),
                    PlotPoints::from(vec![[summary.mean, 0.0]]),
                )
                .color(MARKER_COLOR),
            );
            plot_ui.text(Text::new(
                PlotPoint::new(summary.mean * 1.01, ymax * 0.9),
                RichText::new(format!("母平均：{:.1}", summary.mean))
                    .color(MARKER_COLOR)
                    .size(16.0),
            ));

            // ±1 population std: horizontal arrows near the axis.
            plot_ui.arrows(
                Arrows::new(
                    PlotPoints::from(vec![[summary.mean, 10.0], [summary.mean, 10.0]]),
                    PlotPoints::from(vec![
                        [summary.mean + summary.std_dev, 10.0],
                        [summary.mean - summary.std_dev, 10.0],
                    ]),
                )
                .color(MARKER_COLOR),
            );
            plot_ui.text(Text::new(
                PlotPoint::new(summary.mean * 1.04, 17.0),
                RichText::new(format!("母標準偏差：{:.1}", summary.std_dev))
                    .color(MARKER_COLOR)
                    .size(16.0),
            ));
        });
}

// ---------------------------------------------------------------------------
// (c) Box plot of attack per primary type
// ---------------------------------------------------------------------------

pub fn type_box_plot(ui: &mut Ui, state: &AppState) {
    if state.type_boxes.is_empty() {
        return;
    }

    let labels: Vec<String> = state.type_boxes.iter().map(|(l, _)| l.clone()).collect();
    let elems: Vec<BoxElem> = state
        .type_boxes
        .iter()
        .enumerate()
        .map(|(i, (label, b))| {
            let color = state
                .color_map
                .as_ref()
                .map(|m| m.color_for(label))
                .unwrap_or(BAR_COLOR);
            BoxElem::new(
                i as f64,
                BoxSpread::new(b.whisker_low, b.q1, b.median, b.q3, b.whisker_high),
            )
            .name(label)
            .box_width(0.6)
            .fill(color.gamma_multiply(0.4))
            .stroke(Stroke::new(1.5, color))
        })
        .collect();

    ui.heading(format!("タイプ別の「{}」の箱ひげ図", ANALYZED_STAT.label()));
    Plot::new("type_box_plot")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .y_axis_label(ANALYZED_STAT.label())
        .x_axis_formatter(category_labels(labels))
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(elems));
        });
}

// ---------------------------------------------------------------------------
// (d) Record count per primary type
// ---------------------------------------------------------------------------

pub fn type_distribution(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else { return };
    if dataset.type1_counts.is_empty() {
        return;
    }

    let labels: Vec<String> = dataset
        .type1_counts
        .iter()
        .map(|(l, _)| l.clone())
        .collect();
    let bars: Vec<Bar> = dataset
        .type1_counts
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            let color = state
                .color_map
                .as_ref()
                .map(|m| m.color_for(label))
                .unwrap_or(BAR_COLOR);
            Bar::new(i as f64, *count as f64)
                .width(0.6)
                .fill(color)
                .name(label)
        })
        .collect();

    ui.heading("タイプ別のポケモン数");
    Plot::new("type_distribution")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .y_axis_label("Count")
        .x_axis_formatter(category_labels(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
