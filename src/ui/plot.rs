use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::data::aggregate::Ranked;

// ---------------------------------------------------------------------------
// Chart helpers shared by the dashboard views
// ---------------------------------------------------------------------------

/// One named series over years.
pub struct YearSeries {
    pub name: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// Line chart with markers, x axis = year.
pub fn year_lines(ui: &mut Ui, id: &str, y_label: &str, series: Vec<YearSeries>) {
    Plot::new(id)
        .legend(Legend::default())
        .height(320.0)
        .x_axis_label("Year")
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for s in series {
                let line = Line::new(PlotPoints::from(s.points.clone()))
                    .name(&s.name)
                    .color(s.color)
                    .width(1.5);
                plot_ui.line(line);
                plot_ui.points(
                    Points::new(PlotPoints::from(s.points))
                        .name(&s.name)
                        .color(s.color)
                        .radius(3.0),
                );
            }
        });
}

/// Horizontal bar chart of a ranking, largest at the top.  The y axis
/// carries the entry names.
pub fn ranking_bars(ui: &mut Ui, id: &str, x_label: &str, entries: &[Ranked], color: Color32) {
    let n = entries.len();
    let bars: Vec<Bar> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            Bar::new((n - 1 - i) as f64, e.count as f64)
                .name(&e.name)
                .fill(color)
        })
        .collect();
    let labels: Vec<String> = entries.iter().rev().map(|e| e.name.clone()).collect();

    Plot::new(id)
        .height((n as f32 * 24.0).clamp(120.0, 420.0))
        .x_axis_label(x_label)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show_grid([true, false])
        .y_axis_formatter(move |mark, _range| {
            let v = mark.value;
            if v < 0.0 || (v - v.round()).abs() > 1e-6 {
                return String::new();
            }
            labels.get(v.round() as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

/// Vertical bars over integer categories.
pub fn category_bars(ui: &mut Ui, id: &str, x_label: &str, y_label: &str, values: &[(usize, u32)]) {
    let bars: Vec<Bar> = values
        .iter()
        .map(|&(category, count)| {
            Bar::new(category as f64, count as f64)
                .name(format!("{category}"))
                .width(0.7)
        })
        .collect();

    Plot::new(id)
        .height(320.0)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_BLUE));
        });
}
