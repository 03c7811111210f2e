use axum::{routing::get, Json, Router};

use super::dashboard_service::{DashboardService, DashboardSnapshot};

pub fn dashboard_router() -> Router {
    Router::new().route("/", get(get_dashboard))
}

pub async fn get_dashboard() -> Json<DashboardSnapshot> {
    Json(DashboardService::snapshot())
}
