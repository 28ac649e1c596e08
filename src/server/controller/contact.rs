use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        contact::{CreateMessageDto, InfoMessageDto},
        pagination::PaginationDto,
    },
    server::{
        error::AppError,
        network::{
            mapping::{map_all_to_dto, map_to_dto},
            request::{ReqBody, ReqQuery},
            response::success,
        },
        service::contact::ContactService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// Submit a contact message.
///
/// # Returns
/// - `200 OK` - Message stored
/// - `400 Bad Request` - Malformed body or failed validation, with the joined field messages
/// - `500 Internal Server Error` - Database or mapping error
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = CONTACT_TAG,
    request_body = CreateMessageDto,
    responses(
        (status = 200, description = "Message stored", body = SuccessDto<InfoMessageDto>),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = []))
)]
pub async fn create_message(
    State(state): State<AppState>,
    ReqBody(payload): ReqBody<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ContactService::new(&state.db);

    let message = service.save_message(payload).await?;
    let data: InfoMessageDto = map_to_dto(&message)?;

    Ok(success("message received successfully!", data))
}

/// Get an active contact message by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Message ID taken from the path
///
/// # Returns
/// - `200 OK` - The message
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No active message with the ID
/// - `500 Internal Server Error` - Database or mapping error
#[utoipa::path(
    get,
    path = "/api/contact/id/{id}",
    tag = CONTACT_TAG,
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "The message", body = SuccessDto<InfoMessageDto>),
        (status = 400, description = "Invalid message ID", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = []))
)]
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = ContactService::new(&state.db);

    let Some(message) = service.find_message(id).await? else {
        return Err(AppError::NotFound("message not found".to_string()));
    };
    let data: InfoMessageDto = map_to_dto(&message)?;

    Ok(success("success", data))
}

/// Get a page of active contact messages, newest first.
#[utoipa::path(
    get,
    path = "/api/contact/paginated",
    tag = CONTACT_TAG,
    params(PaginationDto),
    responses(
        (status = 200, description = "Requested page of messages", body = SuccessDto<Vec<InfoMessageDto>>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = []))
)]
pub async fn get_messages_paginated(
    State(state): State<AppState>,
    ReqQuery(pagination): ReqQuery<PaginationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ContactService::new(&state.db);

    let messages = service.find_paginated_messages(&pagination).await?;
    let data: Vec<InfoMessageDto> = map_all_to_dto(&messages)?;

    Ok(success("success", data))
}
