// Match recording: where finished drafts go once the operator confirms them.

use std::path::PathBuf;

use async_trait::async_trait;
use kickoff_draft::DraftResult;
use tokio::sync::Mutex;
use tracing::info;

/// Accepts a finished draft for a match.
#[async_trait]
pub trait MatchRecorder: Send + Sync {
    async fn record(&self, match_id: &str, result: &DraftResult) -> anyhow::Result<()>;
}

/// Writes each result to `<dir>/<match_id>.json`.
pub struct JsonFileRecorder {
    dir: PathBuf,
}

impl JsonFileRecorder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileRecorder { dir: dir.into() }
    }
}

#[async_trait]
impl MatchRecorder for JsonFileRecorder {
    async fn record(&self, match_id: &str, result: &DraftResult) -> anyhow::Result<()> {
        let valid = !match_id.is_empty()
            && match_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            anyhow::bail!("invalid match id '{match_id}': use letters, digits, '-' or '_'");
        }

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(format!("{match_id}.json"));
        let body = serde_json::to_vec_pretty(result)?;
        tokio::fs::write(&path, body).await?;
        info!("Recorded match {} to {}", match_id, path.display());
        Ok(())
    }
}

/// Keeps results in memory for the lifetime of the process.
#[derive(Default)]
pub struct MemoryRecorder {
    records: Mutex<Vec<(String, DraftResult)>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<(String, DraftResult)> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl MatchRecorder for MemoryRecorder {
    async fn record(&self, match_id: &str, result: &DraftResult) -> anyhow::Result<()> {
        self.records
            .lock()
            .await
            .push((match_id.to_string(), result.clone()));
        Ok(())
    }
}
