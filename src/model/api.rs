use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Application level outcome code carried by every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ResponseCode {
    #[serde(rename = "10000")]
    Success,
    #[serde(rename = "10001")]
    Failure,
    #[serde(rename = "10003")]
    InvalidAccessToken,
}

/// Envelope for successful responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessDto<T> {
    pub code: ResponseCode,
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Envelope for error responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub code: ResponseCode,
    pub status: u16,
    pub message: String,
}
