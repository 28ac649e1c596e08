use axum::{
    extract::{FromRequest, Request, State},
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        blog::{BlogDto, CreateBlogDto},
    },
    server::{
        controller::blog::BLOG_TAG,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::RoleCode,
        network::{mapping::map_to_dto, request::ReqBody, response::success},
        service::blog::BlogService,
        state::AppState,
    },
};

/// Create a draft blog.
///
/// The draft is authored by the session user and starts in the `DRAFT` status. The
/// body is bound only after the role check, so callers without the WRITER role never
/// see validation messages.
///
/// # Access Control
/// - `Writer` - Only users holding the WRITER role can create blogs
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `request` - Request carrying the blog draft as JSON
///
/// # Returns
/// - `200 OK` - The created blog
/// - `400 Bad Request` - Invalid blog data or duplicate slug
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User lacks the WRITER role
/// - `500 Internal Server Error` - Database or mapping error
#[utoipa::path(
    post,
    path = "/api/blog/writer",
    tag = BLOG_TAG,
    request_body = CreateBlogDto,
    responses(
        (status = 200, description = "Created blog", body = SuccessDto<BlogDto>),
        (status = 400, description = "Invalid blog data or duplicate slug", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User lacks the WRITER role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = []))
)]
pub async fn create_blog(
    State(state): State<AppState>,
    session: Session,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(RoleCode::Writer)])
        .await?;

    let ReqBody(payload) = ReqBody::<CreateBlogDto>::from_request(request, &state).await?;

    let service = BlogService::new(&state.db);

    let blog = service.create_blog(payload, &user).await?;
    let data: BlogDto = map_to_dto(&blog)?;

    Ok(success("blog creation success", data))
}
