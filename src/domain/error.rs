// Error taxonomy: fatal load-time errors vs recoverable recompute errors
use thiserror::Error;

/// The dataset could not be loaded. Fatal: the service cannot start without
/// a valid dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset source")]
    Io(#[from] std::io::Error),
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(String),
    #[error("row {row}: missing value for column `{column}`")]
    MissingField { row: usize, column: String },
    #[error("row {row}: payload mass `{value}` is not a non-negative number")]
    InvalidPayload { row: usize, value: String },
    #[error("row {row}: outcome `{value}` is not binary")]
    InvalidOutcome { row: usize, value: String },
    #[error("row {row}: launch site `{site}` is not in the known-site set")]
    UnknownSite { row: usize, site: String },
    #[error("dataset contains no launch records")]
    Empty,
}

/// A derived view could not be computed for the current selection.
/// Recoverable: the controller turns these into per-view display fallbacks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    #[error("no launch records for site `{0}`")]
    UnknownSite(String),
    #[error("invalid payload range: low {low} exceeds high {high}")]
    InvalidRange { low: f64, high: f64 },
    #[error("dataset contains no successful launches")]
    NoSuccesses,
}
