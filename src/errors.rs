use axum::http::StatusCode;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid streak data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StreakError {
    #[error("failed to load streak for user {user_id}: {source}")]
    PersistenceReadFailed {
        user_id: String,
        #[source]
        source: StorageError,
    },
    #[error("failed to save streak for user {user_id}: {source}")]
    PersistenceWriteFailed {
        user_id: String,
        #[source]
        source: StorageError,
    },
    #[error("activity type must be 'contact', 'meeting' or 'goal', got '{0}'")]
    InvalidActivityType(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<StreakError> for AppError {
    fn from(err: StreakError) -> Self {
        match err {
            StreakError::InvalidActivityType(_) => Self::bad_request(err.to_string()),
            StreakError::PersistenceReadFailed { .. }
            | StreakError::PersistenceWriteFailed { .. } => {
                error!("{err}");
                Self::internal(err)
            }
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
