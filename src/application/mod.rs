// Application layer - Derive engines and the view controller
pub mod aggregation_service;
pub mod dashboard_service;
pub mod dataset_source;
pub mod scatter_service;
