//! Blog list API handlers.
//!
//! ```text
//! GET    /api/bloglist
//! POST   /api/bloglist       (bearer token)
//! PUT    /api/bloglist/{id}
//! DELETE /api/bloglist/{id}  (bearer token)
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Blog, BlogDraft, BlogPatch, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::BearerUser;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    LikesInput, map_blog_validation_error, parse_blog_id, parse_likes,
};

/// Blog entry as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlogResponse {
    #[schema(example = "5a422a851b54a676234d17f7")]
    pub id: String,
    #[schema(example = "React patterns")]
    pub title: String,
    #[schema(example = "Michael Chan")]
    pub author: String,
    #[schema(example = "https://reactpatterns.com/")]
    pub url: String,
    pub likes: i64,
    /// Creating user's id, or `null` for entries without an owner.
    pub user: Option<String>,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user: blog.owner.map(|owner| owner.to_string()),
        }
    }
}

/// Body accepted by create and update.
///
/// Every field is optional on the wire; create requires `title` and `url`.
/// Unknown fields such as `id` or `user` are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct BlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    /// A number or a numeric string.
    pub likes: Option<LikesInput>,
}

impl BlogRequest {
    fn into_draft(self) -> ApiResult<BlogDraft> {
        let likes = parse_likes(self.likes)?;
        BlogDraft::try_new(self.title, self.author, self.url, likes)
            .map_err(map_blog_validation_error)
    }

    fn into_patch(self) -> ApiResult<BlogPatch> {
        let likes = parse_likes(self.likes)?;
        BlogPatch::try_new(self.title, self.author, self.url, likes)
            .map_err(map_blog_validation_error)
    }
}

/// List every blog in insertion order.
#[utoipa::path(
    get,
    path = "/api/bloglist",
    responses(
        (status = 200, description = "Blogs", body = [BlogResponse]),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["blogs"],
    operation_id = "listBlogs",
    security([])
)]
#[get("/bloglist")]
pub async fn list_blogs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BlogResponse>>> {
    let blogs = state.blogs_query.list_blogs().await?;
    Ok(web::Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

/// Create a blog owned by the caller.
#[utoipa::path(
    post,
    path = "/api/bloglist",
    request_body = BlogRequest,
    responses(
        (status = 201, description = "Created", body = BlogResponse),
        (status = 400, description = "Missing title or url, or invalid likes", body = Error),
        (status = 401, description = "Missing or invalid token", body = Error)
    ),
    tags = ["blogs"],
    operation_id = "createBlog",
    security(("bearer" = []))
)]
#[post("/bloglist")]
pub async fn create_blog(
    state: web::Data<HttpState>,
    caller: BearerUser,
    payload: web::Json<BlogRequest>,
) -> ApiResult<HttpResponse> {
    let caller = caller.into_inner();
    let draft = payload.into_inner().into_draft()?;
    debug!(user_id = %caller.id, title = draft.title(), "creating blog");
    let blog = state.blogs.create_blog(&caller, draft).await?;
    Ok(HttpResponse::Created().json(BlogResponse::from(blog)))
}

/// Replace the fields present in the body.
#[utoipa::path(
    put,
    path = "/api/bloglist/{id}",
    params(("id" = String, Path, description = "Blog id")),
    request_body = BlogRequest,
    responses(
        (status = 200, description = "Updated", body = BlogResponse),
        (status = 400, description = "Malformed id or invalid field", body = Error),
        (status = 404, description = "No such blog", body = Error)
    ),
    tags = ["blogs"],
    operation_id = "updateBlog",
    security([])
)]
#[put("/bloglist/{id}")]
pub async fn update_blog(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<BlogRequest>,
) -> ApiResult<web::Json<BlogResponse>> {
    let id = parse_blog_id(&path)?;
    let patch = payload.into_inner().into_patch()?;
    let blog = state.blogs.update_blog(&id, patch).await?;
    Ok(web::Json(BlogResponse::from(blog)))
}

/// Delete a blog the caller owns.
#[utoipa::path(
    delete,
    path = "/api/bloglist/{id}",
    params(("id" = String, Path, description = "Blog id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Malformed id", body = Error),
        (status = 401, description = "Missing or invalid token", body = Error),
        (status = 403, description = "Blog belongs to another user", body = Error),
        (status = 404, description = "No such blog", body = Error)
    ),
    tags = ["blogs"],
    operation_id = "deleteBlog",
    security(("bearer" = []))
)]
#[delete("/bloglist/{id}")]
pub async fn delete_blog(
    state: web::Data<HttpState>,
    caller: BearerUser,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_blog_id(&path)?;
    state.blogs.delete_blog(&caller.into_inner(), &id).await?;
    Ok(HttpResponse::NoContent().finish())
}
