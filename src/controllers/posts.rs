use sqlx::sqlite::SqlitePool;
use axum::{Extension, Json, http::StatusCode, extract::Query, response::IntoResponse};
use serde_json::json;

use crate::controllers::internal_error;
use crate::schemas::post::{CreatePostSchema, ListPostsQuery, Post};

const DEFAULT_PER_PAGE: u32 = 20;
const MAX_PER_PAGE: u32 = 100;

pub async fn list_posts(
    Extension(pool): Extension<SqlitePool>,
    Query(query): Query<ListPostsQuery>
) -> Result<Json<Vec<Post>>, (StatusCode, Json<serde_json::Value>)> {
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE) as i64;
    let page = query.page.unwrap_or(1).max(1) as i64;

    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, body, created_at
        FROM posts
        ORDER BY id DESC
        LIMIT ? OFFSET ?
        "#
    )
    .bind(per_page)
    .bind((page - 1) * per_page)
    .fetch_all(&pool)
    .await
    .map_err(internal_error)?;

    Ok(Json(posts))
}

// Creation is intentionally unauthenticated.
pub async fn create_post(
    Extension(pool): Extension<SqlitePool>,
    Json(body): Json<CreatePostSchema>
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    if body.title.trim().is_empty() || body.body.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"status": "error", "message": "title and body are required"})),
        ));
    }

    let query_result = sqlx::query(r#"INSERT INTO posts (title, body) VALUES (?, ?)"#)
        .bind(body.title.to_string())
        .bind(body.body.to_string())
        .execute(&pool)
        .await
        .map_err(internal_error)?;

    // Get inserted post by ID
    let post = sqlx::query_as::<_, Post>(r#"SELECT id, title, body, created_at FROM posts WHERE id = ?"#)
        .bind(query_result.last_insert_rowid())
        .fetch_one(&pool)
        .await
        .map_err(internal_error)?;

    let post_response = json!({
        "status": "success",
        "data": {
            "post": &post
        }
    });

    Ok(Json(post_response))
}
