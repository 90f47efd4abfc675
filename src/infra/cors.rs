use tower_http::cors::{Any, CorsLayer};
use http::{
    Method,
    header::{CONTENT_TYPE, AUTHORIZATION, ACCEPT}
};

pub fn create_cors() -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_origin(Any)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]);
    cors
}
