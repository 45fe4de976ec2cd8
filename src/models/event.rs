use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::participant::Participant;

/// A single recorded expense inside an event. Expenses are bookkeeping for
/// the roster UI; the settlement engine works from per-participant totals.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub paid_by: String,
    pub created_at: DateTime<Utc>,
}

/// Stored event record. Access is gated by a single shared password, kept
/// as a SHA-256 hex digest. The hash never leaves the storage layer; API
/// responses are built from the other fields.
#[derive(Clone, Debug)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub participants: Vec<Participant>,
    pub expenses: Vec<Expense>,
}
