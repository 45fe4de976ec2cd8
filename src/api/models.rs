use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::SplitError;
use crate::models::{Event, Expense, Message, Participant, SettlementResult};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateEventRequest {
    pub name: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct JoinEventRequest {
    pub name: String,
    pub password: String,
}

#[derive(Deserialize, IntoParams)]
pub struct CheckEventParams {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    pub participants: Option<Vec<Participant>>,
    pub expenses: Option<Vec<Expense>>,
}

#[derive(Deserialize, ToSchema)]
pub struct PostMessageRequest {
    pub sender_name: String,
    pub text: String,
    /// Optional roster refresh; when present it replaces the event's
    /// known-senders list before the sender check.
    pub participants: Option<Vec<String>>,
}

#[derive(Deserialize, ToSchema)]
pub struct SettlementRequest {
    pub event_name: Option<String>,
    pub participants: Vec<Participant>,
}

#[derive(Deserialize, ToSchema)]
pub struct NotificationsRequest {
    pub settlement: SettlementResult,
}

// Response structs

/// Created event, without the roster (it starts empty).
#[derive(Serialize, ToSchema)]
pub struct EventCreatedResponse {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Full event view. The password hash stays server-side.
#[derive(Serialize, ToSchema)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub participants: Vec<Participant>,
    pub expenses: Vec<Expense>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        EventResponse {
            id: event.id,
            name: event.name,
            created_at: event.created_at,
            participants: event.participants,
            expenses: event.expenses,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CheckEventResponse {
    pub exists: bool,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: Message,
}

#[derive(Serialize, ToSchema)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

#[derive(Serialize, ToSchema)]
pub struct NotificationSummary {
    pub email: String,
    pub subject: String,
}

#[derive(Serialize, ToSchema)]
pub struct NotificationsResponse {
    pub success: bool,
    pub message: String,
    pub notifications: Vec<NotificationSummary>,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SplitError to implement IntoResponse
pub struct ApiError(pub SplitError);

impl From<SplitError> for ApiError {
    fn from(err: SplitError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            SplitError::TooFewParticipants
            | SplitError::MissingEventName
            | SplitError::PasswordTooShort(_)
            | SplitError::MissingMessageFields
            | SplitError::MessageTooLong(_)
            | SplitError::InvalidEmail(_)
            | SplitError::MissingParticipantName
            | SplitError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            SplitError::EventNameTaken(_) => StatusCode::CONFLICT,
            SplitError::EventNotFound(_) => StatusCode::NOT_FOUND,
            SplitError::WrongPassword => StatusCode::UNAUTHORIZED,
            SplitError::UnknownSender(_) => StatusCode::FORBIDDEN,
            SplitError::StorageError(_) | SplitError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
