use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::NaiveDateTime;

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatePostSchema {
    pub title: String,
    pub body: String
}

#[derive(Serialize, FromRow, Deserialize, Debug)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: NaiveDateTime
}

#[derive(Deserialize, Debug)]
pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>
}
