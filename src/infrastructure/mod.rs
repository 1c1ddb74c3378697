// Infrastructure layer - Configuration and the dataset source adapter
pub mod config;
pub mod csv_dataset;
