use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    model::auth::ApiKeyHeaders,
    server::{error::auth::AuthError, error::AppError, network::request::ReqHeaders, state::AppState},
};

/// Rejects requests whose `x-api-key` header is not one of the configured keys.
///
/// The header is bound through `ReqHeaders`, so a missing or blank key is answered
/// with 400 Bad Request before the key is compared. Unknown keys are answered with
/// 403 Forbidden.
pub async fn require_api_key(
    State(state): State<AppState>,
    ReqHeaders(headers): ReqHeaders<ApiKeyHeaders>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !state.api_keys.contains(&headers.api_key) {
        return Err(AuthError::InvalidApiKey.into());
    }

    Ok(next.run(request).await)
}
