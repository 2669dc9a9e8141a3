// GET / handler

use std::convert::Infallible;

/// The chat page, embedded at compile time
const CHAT_PAGE: &str = include_str!("../../templates/chat.html");

/// Serves the main chat page
pub async fn home_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::html(CHAT_PAGE))
}
