use crate::errors::AppError;
use crate::models::{ActivityRequest, ActivityType, StreakSummary, StreakView};
use crate::state::AppState;
use crate::store::StreakStore;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

pub async fn get_streak(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<StreakView>, AppError> {
    let store = user_store(&state, &user_id).await?;
    Ok(Json(store.current_streak_view().await?))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<StreakSummary>, AppError> {
    let store = user_store(&state, &user_id).await?;
    Ok(Json(store.summary().await?))
}

pub async fn add_activity(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<ActivityRequest>,
) -> Result<Json<StreakView>, AppError> {
    let kind = match payload.kind.as_deref() {
        Some(value) => value.parse::<ActivityType>()?,
        None => ActivityType::Contact,
    };

    let store = user_store(&state, &user_id).await?;
    let record = store.add_activity(&payload.activity, kind).await?;
    Ok(Json(record.into()))
}

async fn user_store(state: &AppState, user_id: &str) -> Result<Arc<StreakStore>, AppError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::bad_request("user id must not be empty"));
    }
    Ok(state.store_for(user_id).await)
}
