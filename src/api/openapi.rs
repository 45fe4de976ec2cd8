use utoipa::OpenApi;

use crate::{
    api::models::{
        CheckEventResponse, CreateEventRequest, ErrorResponse, EventCreatedResponse, EventResponse,
        JoinEventRequest, MessageResponse, MessagesResponse, NotificationSummary,
        NotificationsRequest, NotificationsResponse, PostMessageRequest, SettlementRequest,
        UpdateEventRequest,
    },
    models::{Expense, Message, Participant, ParticipantSummary, SettlementResult, Transaction},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_event,
        super::handlers::join_event,
        super::handlers::check_event,
        super::handlers::get_event,
        super::handlers::update_event,
        super::handlers::list_messages,
        super::handlers::post_message,
        super::handlers::calculate_settlement,
        super::handlers::send_notifications
    ),
    components(schemas(
        CreateEventRequest,
        JoinEventRequest,
        UpdateEventRequest,
        PostMessageRequest,
        SettlementRequest,
        NotificationsRequest,
        EventCreatedResponse,
        EventResponse,
        CheckEventResponse,
        MessageResponse,
        MessagesResponse,
        NotificationSummary,
        NotificationsResponse,
        ErrorResponse,
        Participant,
        Expense,
        Message,
        Transaction,
        ParticipantSummary,
        SettlementResult
    )),
    info(
        title = "Eventsplit API",
        description = "API for splitting shared event expenses with minimal transfers",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
