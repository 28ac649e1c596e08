use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, ResponseCode},
        blog::{AuthorDto, BlogDto, CreateBlogDto},
        contact::{CreateMessageDto, InfoMessageDto},
    },
    server::{
        controller::{
            blog::{editor, writer},
            contact,
        },
        middleware::api_key::require_api_key,
        state::AppState,
    },
};

/// Registers the `x-api-key` header security scheme.
struct ApiKeyAddon;

impl Modify for ApiKeyAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-api-key"))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        contact::create_message,
        contact::get_message,
        contact::get_messages_paginated,
        writer::create_blog,
        editor::get_blog,
    ),
    components(schemas(
        ResponseCode,
        ErrorDto,
        CreateMessageDto,
        InfoMessageDto,
        CreateBlogDto,
        BlogDto,
        AuthorDto,
    )),
    modifiers(&ApiKeyAddon),
    tags(
        (name = "contact", description = "Contact form messages"),
        (name = "blog", description = "Blog writing and review")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Every `/api` route requires a configured `x-api-key` header. The Swagger UI at
/// `/api/docs` is served outside the key check.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/contact", post(contact::create_message))
        .route("/contact/id/{id}", get(contact::get_message))
        .route("/contact/paginated", get(contact::get_messages_paginated))
        .route("/blog/writer", post(writer::create_blog))
        .route("/blog/editor/id/{id}", get(editor::get_blog))
        .route_layer(from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}
