use chrono::NaiveDateTime;
use serde::Serialize;

/// A proposed future slot to compensate part of a debit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompensationPlanItem {
    pub slot: NaiveDateTime,
    pub minutes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryStatus {
    Pending,
    Written,
    Failed,
}

impl EntryStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "pending",
            EntryStatus::Written => "written",
            EntryStatus::Failed => "failed",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(EntryStatus::Pending),
            "written" => Some(EntryStatus::Written),
            "failed" => Some(EntryStatus::Failed),
            _ => None,
        }
    }
}

/// One pending write of a confirmed compensation plan.
#[derive(Debug, Clone, Serialize)]
pub struct JournalEntry {
    pub id: i64,
    pub plan_id: i64,
    pub user_id: i64,
    pub seq: i64,
    pub slot: NaiveDateTime,
    pub minutes: i64,
    pub status: EntryStatus,
    pub error: Option<String>,
    pub updated_at: String,
}

impl JournalEntry {
    pub fn plan_item(&self) -> CompensationPlanItem {
        CompensationPlanItem {
            slot: self.slot,
            minutes: self.minutes,
        }
    }
}

/// Result of running (or resuming) the writes of a plan.
#[derive(Debug, Clone, Default)]
pub struct SagaOutcome {
    pub plan_id: i64,
    pub written: usize,
    pub failed: usize,
    pub pending: usize,
    /// First error encountered; later items were not attempted.
    pub first_error: Option<String>,
}

impl SagaOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed == 0 && self.pending == 0
    }
}
