// Derived view domain models, recomputed on every selection change
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteShare {
    pub site: String,
    pub share: f64,
}

/// Success composition for the pie view. The all-sites shape is a share of
/// the dataset-wide success total; the single-site shape is that site's own
/// success rate on the percentage scale. The two statistics are deliberately
/// different formulas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum SuccessAggregate {
    AllSites {
        shares: Vec<SiteShare>,
    },
    #[serde(rename_all = "camelCase")]
    SingleSite {
        success_rate: f64,
        fail_rate: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: u8,
    pub booster_version_category: String,
}

/// The payload/outcome scatter view: surviving records in original order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterView {
    pub points: Vec<ScatterPoint>,
}

/// A derived view as handed to the rendering boundary: either the computed
/// view or a display-level fallback carrying the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ViewSlot<T> {
    Ready { view: T },
    Empty { reason: String },
}

impl<T> ViewSlot<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// The emitted pair. The controller never hands over a partially-updated
/// pair: both slots come from the same recompute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    pub success: ViewSlot<SuccessAggregate>,
    pub scatter: ViewSlot<ScatterView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_sites_aggregate_wire_shape() {
        let aggregate = SuccessAggregate::AllSites {
            shares: vec![SiteShare {
                site: "KSC LC-39A".to_string(),
                share: 0.5,
            }],
        };

        assert_eq!(
            serde_json::to_value(&aggregate).unwrap(),
            json!({"mode": "allSites", "shares": [{"site": "KSC LC-39A", "share": 0.5}]})
        );
    }

    #[test]
    fn test_single_site_aggregate_wire_shape() {
        let aggregate = SuccessAggregate::SingleSite {
            success_rate: 50.0,
            fail_rate: 50.0,
        };

        assert_eq!(
            serde_json::to_value(&aggregate).unwrap(),
            json!({"mode": "singleSite", "successRate": 50.0, "failRate": 50.0})
        );
    }

    #[test]
    fn test_view_slot_wire_shape() {
        let ready = ViewSlot::Ready {
            view: ScatterView { points: Vec::new() },
        };
        assert_eq!(
            serde_json::to_value(&ready).unwrap(),
            json!({"status": "ready", "view": {"points": []}})
        );

        let empty: ViewSlot<ScatterView> = ViewSlot::Empty {
            reason: "no data to display".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&empty).unwrap(),
            json!({"status": "empty", "reason": "no data to display"})
        );
    }
}
