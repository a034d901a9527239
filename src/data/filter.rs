use super::model::{LaunchDataset, LaunchRecord, SiteSelection};

// ---------------------------------------------------------------------------
// Payload / site filter for the scatter chart
// ---------------------------------------------------------------------------

/// Return the records whose payload mass lies in the closed interval
/// `[low, high]` and, for a specific [`SiteSelection::Site`], whose site
/// matches it.
///
/// Output preserves dataset order.  An empty result is an empty vec, not an
/// error.  Callers guarantee `low <= high` (the range control always emits an
/// ordered pair).
pub fn filter_by_payload_and_site<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteSelection,
    low: f64,
    high: f64,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records
        .iter()
        .filter(|rec| {
            rec.payload_mass_kg >= low && rec.payload_mass_kg <= high && site.matches(&rec.site)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> LaunchDataset {
        let rows = [
            ("A", 500.0, "v1.0", 1),
            ("A", 2000.0, "v1.1", 0),
            ("B", 500.0, "FT", 1),
            ("B", 9500.0, "FT", 1),
        ];
        LaunchDataset::from_records(
            rows.iter()
                .map(|&(site, mass, booster, class)| {
                    LaunchRecord::new(site.into(), mass, booster.into(), class).unwrap()
                })
                .collect(),
        )
    }

    #[test]
    fn retains_records_inside_closed_interval() {
        let ds = dataset();
        let hits = filter_by_payload_and_site(&ds, &SiteSelection::All, 0.0, 1000.0);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.payload_mass_kg == 500.0));
    }

    #[test]
    fn site_selection_restricts_further() {
        let ds = dataset();
        let hits = filter_by_payload_and_site(&ds, &SiteSelection::Site("A".into()), 0.0, 10000.0);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.site == "A"));
    }

    #[test]
    fn interval_bounds_are_inclusive() {
        let ds = dataset();
        let hits = filter_by_payload_and_site(&ds, &SiteSelection::All, 500.0, 2000.0);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn degenerate_interval_keeps_exact_matches_only() {
        let ds = dataset();
        let hits = filter_by_payload_and_site(&ds, &SiteSelection::All, 500.0, 500.0);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.payload_mass_kg == 500.0));
    }

    #[test]
    fn output_preserves_dataset_order() {
        let ds = dataset();
        let hits = filter_by_payload_and_site(&ds, &SiteSelection::All, 0.0, 10000.0);
        let masses: Vec<f64> = hits.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(masses, vec![500.0, 2000.0, 500.0, 9500.0]);
    }

    #[test]
    fn no_match_returns_empty_vec() {
        let ds = dataset();
        let hits = filter_by_payload_and_site(&ds, &SiteSelection::All, 3000.0, 4000.0);
        assert!(hits.is_empty());

        let empty = LaunchDataset::from_records(Vec::new());
        assert!(filter_by_payload_and_site(&empty, &SiteSelection::All, 0.0, 10000.0).is_empty());
    }
}
