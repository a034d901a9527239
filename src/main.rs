mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::LaunchDeckApp;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    // Optional dataset path on the command line; a load failure here is
    // fatal since the operator asked for that file.
    let dataset = match std::env::args_os().nth(1) {
        Some(path) => {
            let path = Path::new(&path);
            let ds = data::loader::load_file(path)
                .with_context(|| format!("loading dataset from {}", path.display()))?;
            log::info!(
                "Loaded {} launch records across sites {:?}",
                ds.len(),
                ds.sites
            );
            Some(ds)
        }
        None => None,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Deck – Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDeckApp::with_dataset(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
