use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::filter::filter_by_payload_and_site;
use crate::data::model::SiteSelection;
use crate::state::{AppState, PAYLOAD_RANGE_MAX, PAYLOAD_RANGE_MIN};

// ---------------------------------------------------------------------------
// Left side panel – launch-site and payload-range controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the site list so we can mutate state inside the combo closure.
    let sites = dataset.sites.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Site selector ----
            ui.strong("Launch site");
            egui::ComboBox::from_id_salt("site_selector")
                .selected_text(state.site.label().to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(state.site == SiteSelection::All, "All Sites")
                        .clicked()
                    {
                        state.site = SiteSelection::All;
                    }
                    for site in &sites {
                        let selected = state.site == SiteSelection::Site(site.clone());
                        if ui.selectable_label(selected, site).clicked() {
                            state.site = SiteSelection::Site(site.clone());
                        }
                    }
                });
            ui.separator();

            // ---- Payload range ----
            ui.strong("Payload range (kg)");

            let mut low = state.payload_low;
            if ui
                .add(
                    Slider::new(&mut low, PAYLOAD_RANGE_MIN..=PAYLOAD_RANGE_MAX)
                        .text("min")
                        .integer(),
                )
                .changed()
            {
                state.set_payload_low(low);
            }

            let mut high = state.payload_high;
            if ui
                .add(
                    Slider::new(&mut high, PAYLOAD_RANGE_MIN..=PAYLOAD_RANGE_MAX)
                        .text("max")
                        .integer(),
                )
                .changed()
            {
                state.set_payload_high(high);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let matching =
                filter_by_payload_and_site(ds, &state.site, state.payload_low, state.payload_high)
                    .len();
            ui.label(format!("{} launches loaded, {} matching", ds.len(), matching));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["parquet", "pq", "json", "csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launch records across sites {:?}",
                    dataset.len(),
                    dataset.sites
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
