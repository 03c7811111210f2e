use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use super::follow_up_sequence;
use super::template_resolver::Industry;
use crate::language_model::tone::Tone;

#[derive(Debug, Serialize)]
pub struct TemplateOption {
    pub industry: Industry,
    pub pattern: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<TemplateOption>,
    pub tones: Vec<Tone>,
    pub default_tone: Tone,
}

#[derive(Debug, Deserialize)]
pub struct CustomizeSequenceRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SequenceResponse {
    pub steps: Vec<String>,
}

pub fn follow_up_router() -> Router {
    Router::new()
        .route("/templates", get(list_templates))
        .route("/sequence", get(default_sequence).post(customize_sequence))
}

pub async fn list_templates() -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        templates: Industry::ALL
            .into_iter()
            .map(|industry| TemplateOption {
                industry,
                pattern: industry.pattern(),
            })
            .collect(),
        tones: Tone::ALL.to_vec(),
        default_tone: Tone::default(),
    })
}

pub async fn default_sequence() -> Json<SequenceResponse> {
    Json(SequenceResponse {
        steps: follow_up_sequence::default_steps(),
    })
}

pub async fn customize_sequence(
    Json(request): Json<CustomizeSequenceRequest>,
) -> Json<SequenceResponse> {
    Json(SequenceResponse {
        steps: follow_up_sequence::customize(&request.text),
    })
}
