use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    api::models::*,
    models::SettlementResult,
    service::EventService,
    storage::in_memory::InMemoryStorage,
};

// Define API routes
pub fn api_routes(service: Arc<EventService<InMemoryStorage>>) -> Router {
    Router::new()
        .route("/events", axum::routing::post(create_event))
        .route("/events/join", axum::routing::post(join_event))
        .route("/events/check", axum::routing::get(check_event))
        .route("/events/{event_id}", axum::routing::get(get_event))
        .route("/events/{event_id}", axum::routing::put(update_event))
        .route(
            "/events/{event_id}/messages",
            axum::routing::get(list_messages),
        )
        .route(
            "/events/{event_id}/messages",
            axum::routing::post(post_message),
        )
        .route(
            "/settlements/calculate",
            axum::routing::post(calculate_settlement),
        )
        .route("/notifications", axum::routing::post(send_notifications))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = EventCreatedResponse),
        (status = 400, description = "Missing name or short password", body = ErrorResponse),
        (status = 409, description = "Event name already taken", body = ErrorResponse)
    )
)]
pub(crate) async fn create_event(
    State(service): State<Arc<EventService<InMemoryStorage>>>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventCreatedResponse>), ApiError> {
    let event = service.create_event(&req.name, &req.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(EventCreatedResponse {
            id: event.id,
            name: event.name,
            created_at: event.created_at,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/events/join",
    request_body = JoinEventRequest,
    responses(
        (status = 200, description = "Joined event", body = EventResponse),
        (status = 400, description = "Missing name or short password", body = ErrorResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    )
)]
pub(crate) async fn join_event(
    State(service): State<Arc<EventService<InMemoryStorage>>>,
    Json(req): Json<JoinEventRequest>,
) -> Result<Json<EventResponse>, ApiError> {
    let event = service.join_event(&req.name, &req.password).await?;
    Ok(Json(event.into()))
}

#[utoipa::path(
    get,
    path = "/api/events/check",
    params(CheckEventParams),
    responses(
        (status = 200, description = "Whether an event with that name exists", body = CheckEventResponse),
        (status = 400, description = "Missing event name", body = ErrorResponse)
    )
)]
pub(crate) async fn check_event(
    State(service): State<Arc<EventService<InMemoryStorage>>>,
    Query(params): Query<CheckEventParams>,
) -> Result<Json<CheckEventResponse>, ApiError> {
    let exists = service.event_exists(&params.name).await?;
    Ok(Json(CheckEventResponse { exists }))
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    params(("event_id" = String, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event data", body = EventResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_event(
    State(service): State<Arc<EventService<InMemoryStorage>>>,
    Path(event_id): Path<String>,
) -> Result<Json<EventResponse>, ApiError> {
    let event = service.get_event(&event_id).await?;
    Ok(Json(event.into()))
}

#[utoipa::path(
    put,
    path = "/api/events/{event_id}",
    params(("event_id" = String, Path, description = "Event id")),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Updated event", body = EventResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    )
)]
pub(crate) async fn update_event(
    State(service): State<Arc<EventService<InMemoryStorage>>>,
    Path(event_id): Path<String>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<EventResponse>, ApiError> {
    let event = service
        .update_event(&event_id, req.participants, req.expenses)
        .await?;
    Ok(Json(event.into()))
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/messages",
    params(("event_id" = String, Path, description = "Event id")),
    responses(
        (status = 200, description = "Messages in posting order", body = MessagesResponse)
    )
)]
pub(crate) async fn list_messages(
    State(service): State<Arc<EventService<InMemoryStorage>>>,
    Path(event_id): Path<String>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let messages = service.list_messages(&event_id).await?;
    Ok(Json(MessagesResponse { messages }))
}

#[utoipa::path(
    post,
    path = "/api/events/{event_id}/messages",
    params(("event_id" = String, Path, description = "Event id")),
    request_body = PostMessageRequest,
    responses(
        (status = 201, description = "Message posted", body = MessageResponse),
        (status = 400, description = "Missing fields or message too long", body = ErrorResponse),
        (status = 403, description = "Sender not a known participant", body = ErrorResponse)
    )
)]
pub(crate) async fn post_message(
    State(service): State<Arc<EventService<InMemoryStorage>>>,
    Path(event_id): Path<String>,
    Json(req): Json<PostMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let message = service
        .post_message(&event_id, &req.sender_name, &req.text, req.participants)
        .await?;
    Ok((StatusCode::CREATED, Json(MessageResponse { message })))
}

#[utoipa::path(
    post,
    path = "/api/settlements/calculate",
    request_body = SettlementRequest,
    responses(
        (status = 200, description = "Minimal transfer list and per-participant summary", body = SettlementResult),
        (status = 400, description = "Fewer than 2 participants or invalid fields", body = ErrorResponse)
    )
)]
pub(crate) async fn calculate_settlement(
    State(service): State<Arc<EventService<InMemoryStorage>>>,
    Json(req): Json<SettlementRequest>,
) -> Result<Json<SettlementResult>, ApiError> {
    let result = service.calculate_settlement(req.event_name.as_deref(), &req.participants)?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/notifications",
    request_body = NotificationsRequest,
    responses(
        (status = 200, description = "Notification bodies prepared", body = NotificationsResponse)
    )
)]
pub(crate) async fn send_notifications(
    State(service): State<Arc<EventService<InMemoryStorage>>>,
    Json(req): Json<NotificationsRequest>,
) -> Result<Json<NotificationsResponse>, ApiError> {
    let notifications = service.prepare_notifications(&req.settlement);
    Ok(Json(NotificationsResponse {
        success: true,
        message: format!("{} email notifications prepared", notifications.len()),
        notifications: notifications
            .into_iter()
            .map(|n| NotificationSummary {
                email: n.email,
                subject: n.subject,
            })
            .collect(),
    }))
}
