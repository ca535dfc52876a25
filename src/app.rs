use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/users/:user_id/streak", get(handlers::get_streak))
        .route("/api/users/:user_id/summary", get(handlers::get_summary))
        .route("/api/users/:user_id/activity", post(handlers::add_activity))
        .with_state(state)
}
