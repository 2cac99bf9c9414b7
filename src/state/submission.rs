//! Diagnostic record of an accepted submission

use super::forms::FormValues;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// What gets logged when a submission is accepted
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub values: FormValues,
}

impl SubmissionRecord {
    pub fn new(values: FormValues) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            values,
        }
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{self:?} ({e})"))
    }
}
