// Range filter - payload-bounded subset for the scatter view
use crate::domain::error::ViewError;
use crate::domain::launch::Dataset;
use crate::domain::selection::{PayloadRange, SiteSelection};
use crate::domain::views::{ScatterPoint, ScatterView};

/// Derive the scatter view: records with payload mass inside the inclusive
/// range and, for a specific site selection, a matching site. Original
/// record order is preserved. An inverted range is a caller contract
/// violation, not an empty view; zero matches with valid bounds is a normal
/// empty view.
pub fn compute_scatter_view(
    dataset: &Dataset,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> Result<ScatterView, ViewError> {
    if !range.is_valid() {
        return Err(ViewError::InvalidRange {
            low: range.low,
            high: range.high,
        });
    }

    let points = dataset
        .records()
        .iter()
        .filter(|record| range.contains(record.payload_mass_kg))
        .filter(|record| selection.matches(&record.site))
        .map(|record| ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome.as_class(),
            booster_version_category: record.booster_version_category.clone(),
        })
        .collect();

    Ok(ScatterView { points })
}
