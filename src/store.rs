use crate::clock::Clock;
use crate::errors::StreakError;
use crate::models::{ActivityType, StreakRecord, StreakSummary, StreakView};
use crate::storage::StreakBackend;
use crate::streak::{record_activity, revalidate};
use crate::summary::build_summary_at;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// One user's streak, backed by an injected persistence backend and clock.
///
/// Every operation loads, updates and saves under a per-store lock, so a
/// single `StreakStore` per user keeps read-check-write atomic for that user.
pub struct StreakStore {
    user_id: String,
    backend: Arc<dyn StreakBackend>,
    clock: Arc<dyn Clock>,
    guard: Mutex<()>,
}

impl StreakStore {
    pub fn new(
        user_id: impl Into<String>,
        backend: Arc<dyn StreakBackend>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            backend,
            clock,
            guard: Mutex::new(()),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub async fn add_activity(
        &self,
        activity: &str,
        kind: ActivityType,
    ) -> Result<StreakRecord, StreakError> {
        let _guard = self.guard.lock().await;
        let today = self.clock.today();
        let record = self.load().await?;

        match record_activity(&record, today, activity, kind) {
            Some(updated) => {
                self.save(&updated).await?;
                info!(
                    user_id = %self.user_id,
                    %kind,
                    current_streak = updated.current_streak,
                    longest_streak = updated.longest_streak,
                    "recorded activity"
                );
                Ok(updated)
            }
            None => {
                debug!(user_id = %self.user_id, %today, "activity already recorded today");
                Ok(record)
            }
        }
    }

    pub async fn check_validity(&self) -> Result<StreakRecord, StreakError> {
        let _guard = self.guard.lock().await;
        self.check_validity_locked().await
    }

    pub async fn current_streak_view(&self) -> Result<StreakView, StreakError> {
        Ok(self.check_validity().await?.into())
    }

    pub async fn summary(&self) -> Result<StreakSummary, StreakError> {
        let _guard = self.guard.lock().await;
        let record = self.check_validity_locked().await?;
        Ok(build_summary_at(self.clock.today(), &record))
    }

    async fn check_validity_locked(&self) -> Result<StreakRecord, StreakError> {
        let record = self.load().await?;
        match revalidate(&record, self.clock.today()) {
            Some(updated) => {
                self.save(&updated).await?;
                info!(
                    user_id = %self.user_id,
                    current_streak = updated.current_streak,
                    longest_streak = updated.longest_streak,
                    "streak revalidated"
                );
                Ok(updated)
            }
            None => Ok(record),
        }
    }

    async fn load(&self) -> Result<StreakRecord, StreakError> {
        self.backend
            .load_streak(&self.user_id)
            .await
            .map(Option::unwrap_or_default)
            .map_err(|source| StreakError::PersistenceReadFailed {
                user_id: self.user_id.clone(),
                source,
            })
    }

    async fn save(&self, record: &StreakRecord) -> Result<(), StreakError> {
        self.backend
            .save_streak(&self.user_id, record)
            .await
            .map_err(|source| StreakError::PersistenceWriteFailed {
                user_id: self.user_id.clone(),
                source,
            })
    }
}
