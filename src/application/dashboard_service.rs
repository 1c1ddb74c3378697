// Dashboard service - view controller for the reactive recompute loop
use crate::application::aggregation_service::compute_success_aggregate;
use crate::application::scatter_service::compute_scatter_view;
use crate::domain::launch::Dataset;
use crate::domain::selection::{Selection, SelectorEvent};
use crate::domain::views::{DashboardViews, ViewSlot};
use crate::infrastructure::config::SitesConfig;
use std::sync::Arc;

/// Owns the selection and turns every selector event into one synchronous
/// recompute of both derived views. Recompute errors degrade the affected
/// view to a placeholder and never escape; the selection stays whatever the
/// user set.
pub struct DashboardService {
    dataset: Arc<Dataset>,
    sites: SitesConfig,
    selection: Selection,
}

impl DashboardService {
    pub fn new(dataset: Arc<Dataset>, sites: SitesConfig) -> Self {
        let selection = Selection::initial(dataset.payload_bounds());
        Self {
            dataset,
            sites,
            selection,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn sites(&self) -> &SitesConfig {
        &self.sites
    }

    /// Apply one selector event and recompute. Both views are recomputed
    /// even when only one selector changed, so the emitted pair always
    /// reflects a single (site, range) state.
    pub fn apply(&mut self, event: SelectorEvent) -> DashboardViews {
        match event {
            SelectorEvent::Site(site) => self.selection.site = site,
            SelectorEvent::PayloadRange(range) => self.selection.payload_range = range,
        }
        self.render()
    }

    /// Recompute both views from the current selection.
    pub fn render(&self) -> DashboardViews {
        let success =
            match compute_success_aggregate(&self.dataset, &self.sites, &self.selection.site) {
                Ok(view) => ViewSlot::Ready { view },
                Err(error) => {
                    tracing::warn!("success aggregate unavailable: {error}");
                    ViewSlot::Empty {
                        reason: error.to_string(),
                    }
                }
            };

        let scatter = match compute_scatter_view(
            &self.dataset,
            &self.selection.site,
            &self.selection.payload_range,
        ) {
            Ok(view) => ViewSlot::Ready { view },
            Err(error) => {
                tracing::warn!("scatter view unavailable: {error}");
                ViewSlot::Empty {
                    reason: error.to_string(),
                }
            }
        };

        DashboardViews { success, scatter }
    }
}
