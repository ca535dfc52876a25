pub mod app;
pub mod clock;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;
pub mod streak;
pub mod summary;

pub use app::router;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use errors::{StorageError, StreakError};
pub use models::{ActivityEntry, ActivityType, StreakRecord, StreakView};
pub use state::AppState;
pub use storage::{JsonFileBackend, MemoryBackend, StreakBackend};
pub use store::StreakStore;
