use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use crate::domain::{Dashboard, Tab};

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub tab: Tab,
    pub title: &'static str,
    pub tabs: Vec<Tab>,
}

pub async fn dashboard_handler() -> Json<Dashboard> {
    Json(Dashboard::current())
}

/// Resolves a tab id the way the bottom bar does; unknown ids land on the
/// dashboard.
pub async fn navigation_handler(Path(tab): Path<String>) -> Json<NavigationResponse> {
    let resolved: Tab = tab.parse().unwrap_or_default();
    Json(NavigationResponse {
        tab: resolved,
        title: resolved.title(),
        tabs: Tab::ALL.to_vec(),
    })
}
