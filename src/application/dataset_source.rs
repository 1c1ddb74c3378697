// Source trait for loading the launch dataset
use crate::domain::error::DatasetError;
use crate::domain::launch::Dataset;
use crate::infrastructure::config::SitesConfig;

/// Loads the launch table. Runs exactly once at startup, before any view is
/// produced; implementations own the source format and location, the
/// pipeline only ever sees the parsed `Dataset`.
pub trait DatasetSource {
    fn load(&self, sites: &SitesConfig) -> Result<Dataset, DatasetError>;
}
