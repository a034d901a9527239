use super::model::{LaunchDataset, Outcome, SiteSelection};

// ---------------------------------------------------------------------------
// Success aggregation for the pie chart
// ---------------------------------------------------------------------------

/// Pie-chart input: (slice label, slice value) rows.
pub type ChartTable = Vec<(String, u64)>;

/// Reduce the dataset to pie-chart slices for the given site selection.
///
/// * [`SiteSelection::All`] → one row per distinct site (dataset site order)
///   with that site's total number of successful launches.
/// * [`SiteSelection::Site`] → two rows keyed by outcome label, class order
///   (`Failure` then `Success`), counting launches at that site.
///
/// An empty restriction yields an empty table, never an error; the renderer
/// tolerates an empty chart.
pub fn aggregate_success(dataset: &LaunchDataset, site: &SiteSelection) -> ChartTable {
    match site {
        SiteSelection::All => dataset
            .sites
            .iter()
            .map(|s| {
                let successes = dataset
                    .records
                    .iter()
                    .filter(|r| &r.site == s && r.outcome.is_success())
                    .count() as u64;
                (s.clone(), successes)
            })
            .collect(),
        SiteSelection::Site(s) => {
            let mut failures = 0u64;
            let mut successes = 0u64;
            for rec in dataset.records.iter().filter(|r| &r.site == s) {
                match rec.outcome {
                    Outcome::Failure => failures += 1,
                    Outcome::Success => successes += 1,
                }
            }
            if failures == 0 && successes == 0 {
                return ChartTable::new();
            }
            vec![
                (Outcome::Failure.label().to_string(), failures),
                (Outcome::Success.label().to_string(), successes),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn dataset(rows: &[(&str, f64, i64)]) -> LaunchDataset {
        LaunchDataset::from_records(
            rows.iter()
                .map(|&(site, mass, class)| {
                    LaunchRecord::new(site.into(), mass, "FT".into(), class).unwrap()
                })
                .collect(),
        )
    }

    #[test]
    fn all_sites_sums_successes_per_site() {
        let ds = dataset(&[("A", 500.0, 1), ("A", 2000.0, 0), ("B", 500.0, 1)]);
        let table = aggregate_success(&ds, &SiteSelection::All);
        assert_eq!(table, vec![("A".to_string(), 1), ("B".to_string(), 1)]);
    }

    #[test]
    fn single_site_counts_both_outcomes() {
        let ds = dataset(&[("A", 500.0, 1), ("A", 2000.0, 0), ("A", 300.0, 1), ("B", 1.0, 0)]);
        let table = aggregate_success(&ds, &SiteSelection::Site("A".into()));
        assert_eq!(
            table,
            vec![("Failure".to_string(), 1), ("Success".to_string(), 2)]
        );
        // Counts sum to the number of records at the site.
        let total: u64 = table.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn unmatched_site_yields_empty_table() {
        let ds = dataset(&[("A", 500.0, 1)]);
        let table = aggregate_success(&ds, &SiteSelection::Site("Z".into()));
        assert!(table.is_empty());
    }

    #[test]
    fn empty_dataset_yields_empty_table() {
        let ds = dataset(&[]);
        assert!(aggregate_success(&ds, &SiteSelection::All).is_empty());
        assert!(aggregate_success(&ds, &SiteSelection::Site("A".into())).is_empty());
    }

    #[test]
    fn aggregation_is_idempotent() {
        let ds = dataset(&[("A", 500.0, 1), ("B", 2000.0, 0)]);
        let first = aggregate_success(&ds, &SiteSelection::All);
        let second = aggregate_success(&ds, &SiteSelection::All);
        assert_eq!(first, second);
    }
}
