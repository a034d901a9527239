use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Launch outcome, decoded from the 0/1 `class` column of the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

/// A row that cannot form a valid [`LaunchRecord`].
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("outcome class {0} is not 0 or 1")]
    InvalidOutcomeClass(i64),
    #[error("payload mass {0} is not a finite non-negative number")]
    InvalidPayloadMass(f64),
}

impl Outcome {
    /// Decode the integer `class` column.
    pub fn from_class(class: i64) -> Result<Self, RecordError> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(RecordError::InvalidOutcomeClass(other)),
        }
    }

    /// The 0/1 class value, used as the scatter-plot y coordinate.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch attempt (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch-site name, one of a small fixed set.
    pub site: String,
    /// Payload mass in kilograms, finite and non-negative.
    pub payload_mass_kg: f64,
    /// Booster version category label, used to color scatter points.
    pub booster_version_category: String,
    pub outcome: Outcome,
}

impl LaunchRecord {
    /// Validate raw field values into a record.
    pub fn new(
        site: String,
        payload_mass_kg: f64,
        booster_version_category: String,
        class: i64,
    ) -> Result<Self, RecordError> {
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            return Err(RecordError::InvalidPayloadMass(payload_mass_kg));
        }
        Ok(LaunchRecord {
            site,
            payload_mass_kg,
            booster_version_category,
            outcome: Outcome::from_class(class)?,
        })
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – the user's site filter
// ---------------------------------------------------------------------------

/// Site filter value: a specific launch site or the "all sites" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record at `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == site,
        }
    }

    /// Text shown in the site selector.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(s) => s,
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with indices computed once at load.
/// Read-only for the lifetime of the process: no record is added, removed,
/// or mutated after construction.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launch records, in source order.
    pub records: Vec<LaunchRecord>,
    /// Distinct site names, in first-appearance order.
    pub sites: Vec<String>,
    /// Distinct booster version categories, in first-appearance order.
    pub booster_categories: Vec<String>,
    /// (min, max) payload mass over the dataset; seeds the default slider
    /// positions.  `(0, 0)` for an empty dataset.
    pub payload_bounds: (f64, f64),
}

impl LaunchDataset {
    /// Build dataset indices from loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.iter().any(|s| s == &rec.site) {
                sites.push(rec.site.clone());
            }
            if !booster_categories
                .iter()
                .any(|c| c == &rec.booster_version_category)
            {
                booster_categories.push(rec.booster_version_category.clone());
            }
            min = min.min(rec.payload_mass_kg);
            max = max.max(rec.payload_mass_kg);
        }

        let payload_bounds = if records.is_empty() {
            (0.0, 0.0)
        } else {
            (min, max)
        };

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds,
        }
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(site: &str, mass: f64, class: i64) -> LaunchRecord {
        LaunchRecord::new(site.into(), mass, "FT".into(), class).unwrap()
    }

    #[test]
    fn outcome_decodes_only_binary_classes() {
        assert_eq!(Outcome::from_class(0), Ok(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Ok(Outcome::Success));
        assert_eq!(
            Outcome::from_class(2),
            Err(RecordError::InvalidOutcomeClass(2))
        );
    }

    #[test]
    fn record_rejects_invalid_payload_mass() {
        let err = LaunchRecord::new("A".into(), -1.0, "FT".into(), 1).unwrap_err();
        assert_eq!(err, RecordError::InvalidPayloadMass(-1.0));
        assert!(LaunchRecord::new("A".into(), f64::NAN, "FT".into(), 1).is_err());
    }

    #[test]
    fn dataset_indices_preserve_first_appearance_order() {
        let ds = LaunchDataset::from_records(vec![
            rec("B", 500.0, 1),
            rec("A", 2000.0, 0),
            rec("B", 100.0, 1),
        ]);
        assert_eq!(ds.sites, vec!["B", "A"]);
        assert_eq!(ds.payload_bounds, (100.0, 2000.0));
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_has_zeroed_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.sites.is_empty());
        assert_eq!(ds.payload_bounds, (0.0, 0.0));
    }

    #[test]
    fn site_selection_matching() {
        let all = SiteSelection::All;
        let one = SiteSelection::Site("KSC LC-39A".into());
        assert!(all.matches("anything"));
        assert!(one.matches("KSC LC-39A"));
        assert!(!one.matches("VAFB SLC-4E"));
        assert_eq!(all.label(), "All Sites");
    }
}
