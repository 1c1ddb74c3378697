// Selection state and selector-change events
use serde::Deserialize;

/// Wire sentinel for the site selector meaning "no site filter".
pub const ALL_SITES: &str = "all sites";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SiteSelection {
    AllSites,
    Site(String),
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            Self::AllSites
        } else {
            Self::Site(value)
        }
    }
}

impl SiteSelection {
    pub fn matches(&self, site: &str) -> bool {
        match self {
            Self::AllSites => true,
            Self::Site(id) => id == site,
        }
    }
}

/// Inclusive `[low, high]` bound on payload mass in kilograms.
/// Bounds are validated by the range filter, not at construction, so a
/// degenerate selector event still lands in the selection as the user set it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl PayloadRange {
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_valid(&self) -> bool {
        self.low <= self.high
    }
}

/// The current interactive state. Owned by the view controller and mutated
/// only by selector events.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl Selection {
    /// Initial state: all sites, the dataset's full payload bounds.
    pub const fn initial(bounds: PayloadRange) -> Self {
        Self {
            site: SiteSelection::AllSites,
            payload_range: bounds,
        }
    }
}

/// One selector-change event, delivered by the rendering boundary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum SelectorEvent {
    #[serde(rename = "site")]
    Site(SiteSelection),
    #[serde(rename = "payloadRange")]
    PayloadRange(PayloadRange),
}
