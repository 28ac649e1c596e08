use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        blog::BlogDto,
    },
    server::{
        controller::blog::BLOG_TAG,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::RoleCode,
        network::{mapping::map_to_dto, response::success},
        service::blog::BlogService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Get a blog for review, including its draft text, regardless of status.
///
/// # Access Control
/// - `Editor` - Only users holding the EDITOR role can review blogs
///
/// # Returns
/// - `200 OK` - The blog
/// - `400 Bad Request` - ID is not a positive integer
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User lacks the EDITOR role
/// - `404 Not Found` - No blog with the ID
/// - `500 Internal Server Error` - Database or mapping error
#[utoipa::path(
    get,
    path = "/api/blog/editor/id/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = i32, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "The blog", body = SuccessDto<BlogDto>),
        (status = 400, description = "Invalid blog ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User lacks the EDITOR role", body = ErrorDto),
        (status = 404, description = "Blog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = []))
)]
pub async fn get_blog(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(RoleCode::Editor)])
        .await?;

    let id = parse_id(&id)?;
    let service = BlogService::new(&state.db);

    let Some(blog) = service.find_blog(id).await? else {
        return Err(AppError::NotFound("blog not found".to_string()));
    };
    let data: BlogDto = map_to_dto(&blog)?;

    Ok(success("success", data))
}
