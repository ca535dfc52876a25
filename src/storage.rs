use crate::errors::StorageError;
use crate::models::{StreakFile, StreakRecord};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use tokio::{fs, sync::Mutex};
use tracing::{debug, info};

/// Where streak records live between requests.
#[async_trait]
pub trait StreakBackend: Send + Sync {
    async fn load_streak(&self, user_id: &str) -> Result<Option<StreakRecord>, StorageError>;

    async fn save_streak(&self, user_id: &str, record: &StreakRecord) -> Result<(), StorageError>;
}

/// All users' records in a single JSON document, rewritten on every save.
pub struct JsonFileBackend {
    path: PathBuf,
    data: Mutex<StreakFile>,
}

impl JsonFileBackend {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let data = load_file(&path).await?;
        info!(path = %path.display(), users = data.users.len(), "loaded streak data");
        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }
}

#[async_trait]
impl StreakBackend for JsonFileBackend {
    async fn load_streak(&self, user_id: &str) -> Result<Option<StreakRecord>, StorageError> {
        let data = self.data.lock().await;
        Ok(data.users.get(user_id).cloned())
    }

    async fn save_streak(&self, user_id: &str, record: &StreakRecord) -> Result<(), StorageError> {
        let mut data = self.data.lock().await;
        let mut next = data.clone();
        next.users.insert(user_id.to_string(), record.clone());

        persist_file(&self.path, &next).await?;
        *data = next;
        debug!(user_id, "persisted streak");
        Ok(())
    }
}

async fn load_file(path: &Path) -> Result<StreakFile, StorageError> {
    match fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(StreakFile::default()),
        Err(err) => Err(err.into()),
    }
}

/// Writes a sibling temp file and renames it over `path`, so readers only
/// ever see the previous document or the complete new one.
async fn persist_file(path: &Path, data: &StreakFile) -> Result<(), StorageError> {
    let payload = serde_json::to_vec_pretty(data)?;
    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, payload).await?;
    if let Err(err) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(err.into());
    }
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[derive(Default)]
pub struct MemoryBackend {
    records: Mutex<HashMap<String, StreakRecord>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StreakBackend for MemoryBackend {
    async fn load_streak(&self, user_id: &str) -> Result<Option<StreakRecord>, StorageError> {
        Ok(self.records.lock().await.get(user_id).cloned())
    }

    async fn save_streak(&self, user_id: &str, record: &StreakRecord) -> Result<(), StorageError> {
        self.records
            .lock()
            .await
            .insert(user_id.to_string(), record.clone());
        Ok(())
    }
}
