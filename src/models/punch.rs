use super::punch_role::PunchRole;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// One clock event ("batida"). Read-only to the balance engine.
#[derive(Debug, Clone, Serialize)]
pub struct PunchEvent {
    pub id: i64,
    pub user_id: i64,
    /// `None` when the backend sent a timestamp that could not be parsed.
    pub timestamp: Option<DateTime<Local>>,
    pub label: String,
    /// Role tagged at capture time, when the source provides one.
    pub role: Option<PunchRole>,
}

impl PunchEvent {
    pub fn new(id: i64, user_id: i64, timestamp: DateTime<Local>, label: &str) -> Self {
        Self {
            id,
            user_id,
            timestamp: Some(timestamp),
            label: label.to_string(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: PunchRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date_naive())
    }

    pub fn time_str(&self) -> String {
        self.timestamp
            .map(|ts| ts.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }

    /// Role declared by the event itself: explicit tag first, then label keywords.
    pub fn declared_role(&self) -> Option<PunchRole> {
        self.role.or_else(|| PunchRole::from_label(&self.label))
    }
}
