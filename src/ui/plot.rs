use std::f64::consts::TAU;

use eframe::egui::{Color32, Stroke, Ui};
use egui_extras::{Size, StripBuilder};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points, Polygon};

use crate::color::generate_palette;
use crate::data::aggregate::aggregate_success;
use crate::data::filter::filter_by_payload_and_site;
use crate::data::model::{LaunchDataset, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – pie chart over scatter chart
// ---------------------------------------------------------------------------

/// Render both charts, stacked vertically.
pub fn charts(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a launch-records file to begin  (File → Open…)");
            });
            return;
        }
    };

    StripBuilder::new(ui)
        .size(Size::relative(0.5))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| success_pie(ui, state, dataset));
            strip.cell(|ui| payload_scatter(ui, state, dataset));
        });
}

// ---------------------------------------------------------------------------
// Success pie chart
// ---------------------------------------------------------------------------

fn success_pie(ui: &mut Ui, state: &AppState, dataset: &LaunchDataset) {
    let title = match &state.site {
        SiteSelection::All => "Total successful launches by site".to_string(),
        SiteSelection::Site(s) => format!("Success vs. failure for {s}"),
    };
    ui.strong(title);

    let table = aggregate_success(dataset, &state.site);
    let total: u64 = table.iter().map(|(_, n)| n).sum();

    Plot::new("success_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            if total == 0 {
                return;
            }
            let colors = generate_palette(table.len());

            // Slices start at 12 o'clock and run clockwise, as in the usual
            // pie convention.
            let mut angle = TAU / 4.0;
            for ((label, count), color) in table.iter().zip(colors) {
                if *count == 0 {
                    continue;
                }
                let sweep = -TAU * (*count as f64 / total as f64);
                let slice = Polygon::new(pie_slice(angle, sweep))
                    .fill_color(color)
                    .stroke(Stroke::new(1.0, Color32::from_gray(30)))
                    .name(format!("{label} ({count})"));
                plot_ui.polygon(slice);
                angle += sweep;
            }
        });
}

/// Sample a unit-circle pie slice as a closed polygon.
fn pie_slice(start: f64, sweep: f64) -> PlotPoints<'static> {
    let steps = ((sweep.abs() / TAU) * 64.0).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let a = start + sweep * (i as f64 / steps as f64);
        points.push([a.cos(), a.sin()]);
    }
    PlotPoints::from(points)
}

// ---------------------------------------------------------------------------
// Payload vs. outcome scatter chart
// ---------------------------------------------------------------------------

fn payload_scatter(ui: &mut Ui, state: &AppState, dataset: &LaunchDataset) {
    ui.strong("Payload mass vs. launch outcome");

    let records =
        filter_by_payload_and_site(dataset, &state.site, state.payload_low, state.payload_high);

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Class")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One Points series per booster category, so the legend shows the
            // colour key.  Category order follows the dataset index.
            for category in &dataset.booster_categories {
                let points: Vec<[f64; 2]> = records
                    .iter()
                    .filter(|r| &r.booster_version_category == category)
                    .map(|r| [r.payload_mass_kg, f64::from(r.outcome.class())])
                    .collect();
                if points.is_empty() {
                    continue;
                }

                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .radius(4.0),
                );
            }
        });
}
