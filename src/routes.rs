// Route definitions

use std::sync::Arc;

use warp::Filter;

use crate::handlers;
use crate::state::AppState;

/// Upper bound on multipart bodies; comfortably above any realistic photo
const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub fn configure_routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let state_filter = warp::any().map(move || state.clone());

    // GET /
    let home = warp::path::end()
        .and(warp::get())
        .and_then(handlers::home_handler);

    // POST /get-response
    let get_response = warp::path("get-response")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter.clone())
        .and_then(handlers::get_response_handler);

    // POST /analyze-image
    let analyze_image = warp::path("analyze-image")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::multipart::form().max_length(MAX_UPLOAD_BYTES))
        .and(state_filter)
        .and_then(handlers::analyze_image_handler);

    // Combine routes
    home.or(get_response).or(analyze_image)
}
