use eframe::egui;

use crate::data::model::LaunchDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDeckApp {
    pub state: AppState,
}

impl Default for LaunchDeckApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl LaunchDeckApp {
    /// Start with a dataset already loaded (from the command line).
    pub fn with_dataset(dataset: Option<LaunchDataset>) -> Self {
        let mut app = Self::default();
        if let Some(ds) = dataset {
            app.state.set_dataset(ds);
        }
        app
    }
}

impl eframe::App for LaunchDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: site + payload controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie + scatter charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::charts(ui, &self.state);
        });
    }
}
