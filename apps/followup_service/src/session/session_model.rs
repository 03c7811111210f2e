use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Lead,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: Role,
    pub text: String,
}

/// One generated follow-up, as exported to `crm_logs.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub lead: String,
    pub phone: String,
    pub industry: String,
    pub generated_at: DateTime<Utc>,
    pub message: String,
}

/// Chat transcript and CRM log of one demo session. Both are append-only.
#[derive(Debug, Default)]
pub struct Session {
    transcript: Vec<TranscriptEntry>,
    logs: Vec<LogEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_turn(&mut self, role: Role, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry {
            role,
            text: text.into(),
        });
    }

    pub fn push_log(&mut self, entry: LogEntry) {
        self.logs.push(entry);
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Oldest first.
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// The last `window` entries, newest first.
    pub fn recent_logs(&self, window: usize) -> Vec<LogEntry> {
        let start = self.logs.len().saturating_sub(window);
        self.logs[start..].iter().rev().cloned().collect()
    }

    /// Full log as a pretty-printed JSON array.
    pub fn export_logs(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(lead: &str, minute: u32) -> LogEntry {
        LogEntry {
            lead: lead.to_string(),
            phone: "91800XXXXX".to_string(),
            industry: "Real Estate".to_string(),
            generated_at: Utc.with_ymd_and_hms(2026, 10, 16, 9, minute, 0).unwrap(),
            message: format!("Hi {}", lead),
        }
    }

    #[test]
    fn recent_logs_are_newest_first_and_windowed() {
        let mut session = Session::new();
        for (i, lead) in ["a", "b", "c", "d"].iter().enumerate() {
            session.push_log(entry(lead, i as u32));
        }

        let leads: Vec<String> = session.recent_logs(2).into_iter().map(|e| e.lead).collect();
        assert_eq!(leads, vec!["d", "c"]);
        assert_eq!(session.recent_logs(10).len(), 4);
        assert!(session.recent_logs(0).is_empty());
        assert_eq!(session.logs().len(), 4);
    }

    #[test]
    fn export_round_trips_every_field() {
        let mut session = Session::new();
        session.push_log(entry("Asha", 1));
        let mut precise = entry("Ravi", 2);
        precise.generated_at = precise.generated_at + chrono::Duration::nanoseconds(123_456_789);
        precise.message = "line one\n\n\"quoted\" — dash".to_string();
        session.push_log(precise);

        let json = session.export_logs().unwrap();
        assert!(json.starts_with("[\n  {"));

        let parsed: Vec<LogEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session.logs());
    }

    #[test]
    fn export_uses_crm_field_names() {
        let mut session = Session::new();
        session.push_log(entry("Asha", 1));

        let value: serde_json::Value = serde_json::from_str(&session.export_logs().unwrap()).unwrap();
        let first = &value[0];
        for key in ["lead", "phone", "industry", "generated_at", "message"] {
            assert!(first.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn empty_session_exports_empty_array() {
        assert_eq!(Session::new().export_logs().unwrap(), "[]");
    }

    #[test]
    fn transcript_keeps_order_and_roles() {
        let mut session = Session::new();
        session.push_turn(Role::Lead, "busy, send info");
        session.push_turn(Role::Agent, "Hi Asha");

        assert_eq!(session.transcript()[0].role, Role::Lead);
        assert_eq!(session.transcript()[1].text, "Hi Asha");
        assert_eq!(
            serde_json::to_value(&session.transcript()[1]).unwrap(),
            serde_json::json!({ "role": "agent", "text": "Hi Asha" })
        );
    }
}
