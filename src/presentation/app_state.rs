// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use tokio::sync::Mutex;

/// Selector events are serialized through the controller lock: one mutation
/// is processed to completion before the next is accepted, so the emitted
/// view pair always reflects a single (site, range) state.
pub struct AppState {
    pub controller: Mutex<DashboardService>,
}
