use crate::color::ColorMap;
use crate::data::model::{LaunchDataset, SiteSelection};

/// Payload slider bounds in kilograms, matching the source control.
pub const PAYLOAD_RANGE_MIN: f64 = 0.0;
pub const PAYLOAD_RANGE_MAX: f64 = 10_000.0;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is the only long-lived value and is never mutated after load;
/// the charts are recomputed from it and the current selection on every
/// interaction.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<LaunchDataset>,

    /// Current site filter.
    pub site: SiteSelection,

    /// Lower payload bound (kg).  Always `<= payload_high`.
    pub payload_low: f64,

    /// Upper payload bound (kg).
    pub payload_high: f64,

    /// Colours for booster version categories in the scatter chart.
    pub booster_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            site: SiteSelection::All,
            payload_low: PAYLOAD_RANGE_MIN,
            payload_high: PAYLOAD_RANGE_MAX,
            booster_colors: ColorMap::default(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset the site selection, seed the
    /// payload range from the dataset bounds, and rebuild booster colours.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        let (min, max) = dataset.payload_bounds;
        self.payload_low = min.clamp(PAYLOAD_RANGE_MIN, PAYLOAD_RANGE_MAX);
        self.payload_high = max.clamp(self.payload_low, PAYLOAD_RANGE_MAX);

        self.site = SiteSelection::All;
        self.booster_colors =
            ColorMap::new(dataset.booster_categories.iter().map(String::as_str));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Move the lower slider; drags the upper one along so the pair stays
    /// ordered.
    pub fn set_payload_low(&mut self, low: f64) {
        self.payload_low = low.clamp(PAYLOAD_RANGE_MIN, PAYLOAD_RANGE_MAX);
        if self.payload_high < self.payload_low {
            self.payload_high = self.payload_low;
        }
    }

    /// Move the upper slider; drags the lower one along so the pair stays
    /// ordered.
    pub fn set_payload_high(&mut self, high: f64) {
        self.payload_high = high.clamp(PAYLOAD_RANGE_MIN, PAYLOAD_RANGE_MAX);
        if self.payload_low > self.payload_high {
            self.payload_low = self.payload_high;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("A".into(), 800.0, "v1.0".into(), 1).unwrap(),
            LaunchRecord::new("B".into(), 6000.0, "FT".into(), 0).unwrap(),
        ])
    }

    #[test]
    fn set_dataset_seeds_range_from_bounds() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.payload_low, 800.0);
        assert_eq!(state.payload_high, 6000.0);
        assert_eq!(state.site, SiteSelection::All);
    }

    #[test]
    fn sliders_always_emit_an_ordered_pair() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.set_payload_low(7000.0);
        assert!(state.payload_low <= state.payload_high);
        assert_eq!(state.payload_high, 7000.0);

        state.set_payload_high(1000.0);
        assert!(state.payload_low <= state.payload_high);
        assert_eq!(state.payload_low, 1000.0);
    }

    #[test]
    fn sliders_clamp_to_control_bounds() {
        let mut state = AppState::default();
        state.set_payload_high(20_000.0);
        assert_eq!(state.payload_high, PAYLOAD_RANGE_MAX);
        state.set_payload_low(-5.0);
        assert_eq!(state.payload_low, PAYLOAD_RANGE_MIN);
    }
}
