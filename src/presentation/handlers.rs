// HTTP request handlers
use crate::domain::selection::SelectorEvent;
use crate::domain::views::DashboardViews;
use crate::presentation::app_state::AppState;
use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct SiteOption {
    pub id: String,
    pub label: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the known-site selector options
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<Vec<SiteOption>> {
    let controller = state.controller.lock().await;
    let sites = controller
        .sites()
        .sites
        .iter()
        .map(|site| SiteOption {
            id: site.id.clone(),
            label: site.label.clone(),
        })
        .collect();
    Json(sites)
}

/// Render both derived views for the current selection
pub async fn current_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardViews> {
    let controller = state.controller.lock().await;
    Json(controller.render())
}

/// Apply one selector-change event and return the recomputed views
pub async fn apply_selection(
    State(state): State<Arc<AppState>>,
    Json(event): Json<SelectorEvent>,
) -> Json<DashboardViews> {
    let mut controller = state.controller.lock().await;
    Json(controller.apply(event))
}
