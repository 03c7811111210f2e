use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer, http::StatusCode, routing::get, BoxError, Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    app_module::AppState, dashboard::dashboard_controller::dashboard_router,
    follow_up::follow_up_controller::follow_up_router, health::health_controller,
    session::session_controller::session_router, ui::page_controller,
};

pub fn application_router() -> Router {
    Router::new()
        .route("/", get(page_controller::index))
        .route("/v1/health", get(health_controller::health))
        .nest("/v1/follow-up", follow_up_router())
        .nest("/v1/dashboard", dashboard_router())
        .nest("/v1/sessions", session_router())
}

/// Routes plus the middleware stack the server runs with.
pub fn application(state: AppState, request_timeout: Duration) -> Router {
    Router::new().merge(application_router()).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|error: BoxError| async move {
                if error.is::<tower::timeout::error::Elapsed>() {
                    Ok(StatusCode::REQUEST_TIMEOUT)
                } else {
                    Err((
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Unhandled internal error: {}", error),
                    ))
                }
            }))
            .timeout(request_timeout)
            .layer(TraceLayer::new_for_http())
            .layer(Extension(state))
            .layer(
                CorsLayer::new()
                    .allow_origin(tower_http::cors::Any)
                    .allow_methods(tower_http::cors::Any)
                    .allow_headers(tower_http::cors::Any),
            )
            .into_inner(),
    )
}
