use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Chat message within an event. Messages are append-only and delivered by
/// polling, not pushed.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub id: String,
    pub event_id: String,
    pub sender_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
