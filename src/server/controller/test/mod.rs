use axum::{
    body::{to_bytes, Body},
    extract::{Path, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{blog::CreateBlogDto, contact::CreateMessageDto, pagination::PaginationDto},
    server::{
        error::AppError,
        middleware::session::AuthSession,
        network::request::{ReqBody, ReqQuery},
        state::AppState,
    },
};


fn state(db: &DatabaseConnection) -> AppState {
    AppState::new(db.clone(), HashSet::new())
}

/// Builds a POST request carrying `payload` as JSON.
fn json_request<T: Serialize>(payload: &T) -> Request {
    raw_request(serde_json::to_vec(payload).unwrap())
}

/// Builds a POST request carrying `body` unchanged.
fn raw_request(body: impl Into<Body>) -> Request {
    Request::builder()
        .method("POST")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

/// Renders a handler result and parses the JSON envelope.
async fn into_json<R: IntoResponse>(result: Result<R, AppError>) -> (StatusCode, Value) {
    let response: Response = match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    };
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
