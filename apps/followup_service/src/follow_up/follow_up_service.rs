use chrono::Utc;

use super::template_resolver;
use crate::language_model::polish_service::Polisher;
use crate::language_model::tone::Tone;
use crate::session::session_model::{LogEntry, Role, Session};

pub const LLM_ERROR_MARKER: &str = "[LLM ERROR]";

#[derive(Debug, Clone)]
pub struct FollowUpRequest {
    pub industry: String,
    pub lead_name: String,
    pub lead_phone: String,
    pub tone: Tone,
}

pub fn simulated_context(industry: &str) -> String {
    format!(
        "Simulated context: previous inquiry about price; no reply in 3 days. Industry: {}",
        industry
    )
}

pub fn fallback_message(error: &anyhow::Error, original: &str) -> String {
    format!(
        "{} {:#}\n\nOriginal message: {}",
        LLM_ERROR_MARKER, error, original
    )
}

pub struct FollowUpService;

impl FollowUpService {
    /// Polished text for `base`, or the marked fallback carrying `base`
    /// unchanged. Never fails.
    pub async fn polish_or_fallback(
        polisher: &(dyn Polisher + Send + Sync),
        base: &str,
        context: &str,
        tone: Tone,
    ) -> String {
        match polisher.polish(base, context, tone).await {
            Ok(polished) => polished,
            Err(e) => {
                tracing::warn!("Polishing failed, keeping original message: {:#}", e);
                fallback_message(&e, base)
            }
        }
    }

    /// Resolve and polish one follow-up. Reads no session state, so callers
    /// can run it without holding the session lock.
    pub async fn compose(
        polisher: &(dyn Polisher + Send + Sync),
        request: FollowUpRequest,
    ) -> LogEntry {
        let base = template_resolver::resolve(&request.industry, &request.lead_name);
        let context = simulated_context(&request.industry);
        let message = Self::polish_or_fallback(polisher, &base, &context, request.tone).await;

        tracing::info!(
            industry = %request.industry,
            tone = request.tone.label(),
            "Follow-up composed"
        );

        LogEntry {
            lead: request.lead_name,
            phone: request.lead_phone,
            industry: request.industry,
            generated_at: Utc::now(),
            message,
        }
    }

    /// Append a composed follow-up to the transcript and the CRM log.
    pub fn record(session: &mut Session, entry: &LogEntry) {
        session.push_turn(Role::Agent, entry.message.clone());
        session.push_log(entry.clone());
    }

    pub fn simulate_reply(session: &mut Session, text: String) {
        session.push_turn(Role::Lead, text);
    }
}
