// Aggregation engine - success composition for the pie view
use crate::domain::error::ViewError;
use crate::domain::launch::{Dataset, LaunchRecord};
use crate::domain::selection::SiteSelection;
use crate::domain::views::{SiteShare, SuccessAggregate};
use crate::infrastructure::config::SitesConfig;
use std::collections::HashMap;

/// Derive the success composition for the current site selection.
///
/// All sites: each site's successes as a share of the dataset-wide success
/// total, sites with zero successes omitted. A single site: that site's own
/// success rate against its failure rate, on the percentage scale. The two
/// statistics are intentionally different formulas.
pub fn compute_success_aggregate(
    dataset: &Dataset,
    sites: &SitesConfig,
    selection: &SiteSelection,
) -> Result<SuccessAggregate, ViewError> {
    match selection {
        SiteSelection::AllSites => {
            let total_successes: f64 = dataset
                .records()
                .iter()
                .map(|record| record.outcome.as_value())
                .sum();
            if total_successes == 0.0 {
                return Err(ViewError::NoSuccesses);
            }

            let by_site = group_by_site(dataset, sites);
            let shares = sites
                .sites
                .iter()
                .filter_map(|site| {
                    let successes: f64 = by_site
                        .get(site.id.as_str())?
                        .iter()
                        .map(|record| record.outcome.as_value())
                        .sum();
                    (successes > 0.0).then(|| SiteShare {
                        site: site.id.clone(),
                        share: successes / total_successes,
                    })
                })
                .collect();

            Ok(SuccessAggregate::AllSites { shares })
        }
        SiteSelection::Site(id) => {
            let outcomes: Vec<f64> = dataset
                .records()
                .iter()
                .filter(|record| record.site == *id)
                .map(|record| record.outcome.as_value())
                .collect();
            if outcomes.is_empty() {
                return Err(ViewError::UnknownSite(id.clone()));
            }

            let success_rate = 100.0 * outcomes.iter().sum::<f64>() / outcomes.len() as f64;
            Ok(SuccessAggregate::SingleSite {
                success_rate,
                fail_rate: 100.0 - success_rate,
            })
        }
    }
}

/// Record subsets keyed by the known-site configuration. Adding a site is a
/// configuration change, not a new code branch.
fn group_by_site<'a>(
    dataset: &'a Dataset,
    sites: &SitesConfig,
) -> HashMap<&'a str, Vec<&'a LaunchRecord>> {
    let mut by_site: HashMap<&str, Vec<&LaunchRecord>> = HashMap::new();
    for record in dataset.records() {
        if sites.contains(&record.site) {
            by_site.entry(record.site.as_str()).or_default().push(record);
        }
    }
    by_site
}
