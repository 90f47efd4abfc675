use axum::{Router, routing::{get, post}};
use crate::controllers::{
    auth::{login, register},
    posts::{create_post, list_posts},
    shortlist::{shortlist_add, shortlist_index, shortlist_remove}
};

pub fn create_router() -> Router {
    let auth: Router = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    // Identity is resolved by the Claims extractor on every handler in
    // this group, before any business logic runs.
    let users: Router = Router::new()
        .route("/shortlist", get(shortlist_index))
        .route("/shortlist/:post_id", post(shortlist_add).delete(shortlist_remove));

    let posts: Router = Router::new()
        .route("/", get(list_posts).post(create_post));

    Router::new().nest(
        "/v1",
        Router::new()
            .nest("/auth", auth)
            .nest("/users", users)
            .nest("/posts", posts),
    )
}
