use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::session_model::{LogEntry, TranscriptEntry};
use super::session_store::SessionHandle;
use crate::app_module::AppState;
use crate::error::ServiceError;
use crate::follow_up::follow_up_service::{FollowUpRequest, FollowUpService};
use crate::language_model::tone::Tone;

pub const EXPORT_FILE_NAME: &str = "crm_logs.json";

#[derive(Debug, Deserialize)]
pub struct GenerateFollowUpRequest {
    pub industry: String,
    pub lead_name: String,
    #[serde(default)]
    pub lead_phone: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Deserialize)]
pub struct SimulateReplyRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub transcript: Vec<TranscriptEntry>,
    /// Newest first, at most the configured display window.
    pub recent_logs: Vec<LogEntry>,
    pub total_logs: usize,
}

pub fn session_router() -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/:id", get(get_session).delete(end_session))
        .route("/:id/follow-ups", post(generate_follow_up))
        .route("/:id/replies", post(simulate_reply))
        .route("/:id/logs/export", get(export_logs))
}

async fn session_handle(ctx: &AppState, id: &Uuid) -> Result<SessionHandle, ServiceError> {
    ctx.sessions
        .get(id)
        .await
        .ok_or_else(|| ServiceError::NotFound(format!("session {} does not exist", id)))
}

pub async fn create_session(Extension(ctx): Extension<AppState>) -> impl IntoResponse {
    let session_id = ctx.sessions.create().await;
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

pub async fn get_session(
    Extension(ctx): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ServiceError> {
    let handle = session_handle(&ctx, &id).await?;
    let session = handle.lock().await;

    Ok(Json(SessionView {
        session_id: id,
        transcript: session.transcript().to_vec(),
        recent_logs: session.recent_logs(ctx.config.display_window),
        total_logs: session.logs().len(),
    }))
}

pub async fn end_session(
    Extension(ctx): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServiceError> {
    if ctx.sessions.remove(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServiceError::NotFound(format!("session {} does not exist", id)))
    }
}

pub async fn generate_follow_up(
    Extension(ctx): Extension<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<GenerateFollowUpRequest>,
) -> Result<Json<LogEntry>, ServiceError> {
    let handle = session_handle(&ctx, &id).await?;

    // Polish outside the lock so a slow call never delays another action on
    // the same session past the request timeout.
    let entry = FollowUpService::compose(
        ctx.service.polisher.as_ref(),
        FollowUpRequest {
            industry: request.industry,
            lead_name: request.lead_name,
            lead_phone: request.lead_phone,
            tone: request.tone,
        },
    )
    .await;

    FollowUpService::record(&mut *handle.lock().await, &entry);

    Ok(Json(entry))
}

pub async fn simulate_reply(
    Extension(ctx): Extension<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SimulateReplyRequest>,
) -> Result<Json<Vec<TranscriptEntry>>, ServiceError> {
    let handle = session_handle(&ctx, &id).await?;
    let mut session = handle.lock().await;

    FollowUpService::simulate_reply(&mut session, request.message);

    Ok(Json(session.transcript().to_vec()))
}

pub async fn export_logs(
    Extension(ctx): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let handle = session_handle(&ctx, &id).await?;
    let body = handle.lock().await.export_logs()?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        body,
    ))
}
