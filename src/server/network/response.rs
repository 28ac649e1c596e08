use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::model::api::{ResponseCode, SuccessDto};

/// Builds a `200 OK` response wrapping `data` in the success envelope.
///
/// # Arguments
/// - `message` - Human-readable outcome shown to the client
/// - `data` - Payload placed under the `data` key
///
/// # Returns
/// A status/body pair that Axum turns into the response
pub fn success<T: Serialize>(message: &str, data: T) -> (StatusCode, Json<SuccessDto<T>>) {
    (
        StatusCode::OK,
        Json(SuccessDto {
            code: ResponseCode::Success,
            status: StatusCode::OK.as_u16(),
            message: message.to_string(),
            data: Some(data),
        }),
    )
}
