// Handlers module

pub mod analyze_image;
pub mod chat;
pub mod home;

pub use analyze_image::analyze_image_handler;
pub use chat::get_response_handler;
pub use home::home_handler;

use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

use crate::models::{ChatResponse, ErrorResponse};

/// 200 reply carrying generated text under `response`
fn success_reply(response: String) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(&ChatResponse { response }), StatusCode::OK)
}

/// Failure reply carrying a human-readable `error` string
fn error_reply(status: StatusCode, error: &str) -> WithStatus<Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorResponse {
            error: error.to_string(),
        }),
        status,
    )
}
