use sqlx::sqlite::SqlitePool;
use axum::{Extension, Json, http::StatusCode, response::{IntoResponse, Response}};
use serde_json::json;

use crate::controllers::internal_error;
use crate::modules::{hash, jwt::generate_jwt};
use crate::schemas::{
    auth::{AuthError, LoginSchema},
    user::{to_user_response, RegisterSchema, User}
};

pub async fn register(
    Extension(pool): Extension<SqlitePool>,
    Json(body): Json<RegisterSchema>
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    if body.name.trim().is_empty() || body.email.trim().is_empty() || body.password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"status": "error", "message": "name, email and password are required"})),
        ));
    }

    let password = hash::hash(&body.password).map_err(internal_error)?;
    let query_result = sqlx::query(r#"INSERT INTO users (name, email, password) VALUES (?, ?, ?)"#)
        .bind(body.name.to_string())
        .bind(body.email.to_string())
        .bind(password)
        .execute(&pool)
        .await
        .map_err(|err| err.to_string());

    if let Err(err) = query_result {
        if err.contains("UNIQUE constraint failed") {
            let error_response = json!({
                "status": "error",
                "message": "User already exists",
            });
            return Err((StatusCode::CONFLICT, Json(error_response)));
        }

        return Err(internal_error(err));
    }

    let user = sqlx::query_as::<_, User>(r#"SELECT id, name, email, password FROM users WHERE email = ?"#)
        .bind(&body.email)
        .fetch_one(&pool)
        .await
        .map_err(internal_error)?;

    let token = generate_jwt(&user).map_err(internal_error)?;

    let user_response = json!({
        "status": "success",
        "data": {
            "user": to_user_response(&user),
            "token": token
        }
    });

    Ok(Json(user_response))
}

pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Json(body): Json<LoginSchema>
) -> Result<Json<serde_json::Value>, Response> {
    let user = sqlx::query_as::<_, User>(r#"SELECT id, name, email, password FROM users WHERE email = ?"#)
        .bind(&body.email)
        .fetch_optional(&pool)
        .await
        .map_err(|e| internal_error(e).into_response())?;

    // Unknown email and wrong password get the same answer.
    let user = user.ok_or_else(|| AuthError::WrongCredentials.into_response())?;

    if !hash::verify(&body.password, &user.password) {
        return Err(AuthError::WrongCredentials.into_response());
    }

    let token = generate_jwt(&user).map_err(|e| internal_error(e).into_response())?;

    let response = json!({
        "status": "success",
        "data": {
            "token": token
        }
    });
    Ok(Json(response))
}
