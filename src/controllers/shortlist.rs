use sqlx::sqlite::SqlitePool;
use axum::{Extension, Json, http::StatusCode, extract::Path, response::IntoResponse};
use serde_json::json;

use crate::controllers::internal_error;
use crate::schemas::{claims::Claims, post::Post};

/// Most recently added first.
pub async fn shortlist_index(
    claims: Claims,
    Extension(pool): Extension<SqlitePool>
) -> Result<Json<Vec<Post>>, (StatusCode, Json<serde_json::Value>)> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT posts.id, posts.title, posts.body, posts.created_at
        FROM posts
        JOIN shortlists ON shortlists.post_id = posts.id
        WHERE shortlists.user_id = ?
        ORDER BY shortlists.created_at DESC, shortlists.post_id DESC
        "#
    )
    .bind(claims.uid)
    .fetch_all(&pool)
    .await
    .map_err(internal_error)?;

    Ok(Json(posts))
}

pub async fn shortlist_add(
    claims: Claims,
    Path(post_id): Path<i64>,
    Extension(pool): Extension<SqlitePool>
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    let post = sqlx::query_as::<_, Post>(r#"SELECT id, title, body, created_at FROM posts WHERE id = ?"#)
        .bind(post_id)
        .fetch_optional(&pool)
        .await
        .map_err(internal_error)?;

    if post.is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({"status": "error", "message": "Post not found"})),
        ));
    }

    // The primary key on (user_id, post_id) makes the duplicate check
    // atomic under concurrent requests.
    let query_result = sqlx::query(r#"INSERT INTO shortlists (user_id, post_id) VALUES (?, ?)"#)
        .bind(claims.uid)
        .bind(post_id)
        .execute(&pool)
        .await
        .map_err(|err| err.to_string());

    if let Err(err) = query_result {
        if err.contains("UNIQUE constraint failed") {
            let error_response = json!({
                "status": "error",
                "message": "Post already shortlisted",
            });
            return Err((StatusCode::CONFLICT, Json(error_response)));
        }

        return Err(internal_error(err));
    }

    let response = json!({
        "status": "success",
        "data": {
            "post_id": post_id
        }
    });

    Ok(Json(response))
}

pub async fn shortlist_remove(
    claims: Claims,
    Path(post_id): Path<i64>,
    Extension(pool): Extension<SqlitePool>
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    let query_result = sqlx::query(r#"DELETE FROM shortlists WHERE user_id = ? AND post_id = ?"#)
        .bind(claims.uid)
        .bind(post_id)
        .execute(&pool)
        .await
        .map_err(internal_error)?;

    if query_result.rows_affected() == 0 {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({"status": "error", "message": "Post is not shortlisted"})),
        ));
    }

    let response = json!({
        "status": "success",
        "data": {
            "post_id": post_id
        }
    });

    Ok(Json(response))
}
