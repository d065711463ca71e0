use std::path::PathBuf;
use std::time::Duration;

use checklist_core::Check;

use crate::{ChecklistClient, FailureKind, FetchError};

/// Answers every fetch with a fixed result, optionally after a delay.
#[derive(Debug, Clone)]
pub struct StaticChecklistClient {
    result: Result<Vec<Check>, FetchError>,
    delay: Option<Duration>,
}

impl StaticChecklistClient {
    pub fn new(checks: Vec<Check>) -> Self {
        Self {
            result: Ok(checks),
            delay: None,
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            result: Err(error),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait::async_trait]
impl ChecklistClient for StaticChecklistClient {
    async fn fetch(&self) -> Result<Vec<Check>, FetchError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }
}

/// Reads a JSON array of checks from disk on every fetch.
#[derive(Debug, Clone)]
pub struct FileChecklistClient {
    path: PathBuf,
}

impl FileChecklistClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ChecklistClient for FileChecklistClient {
    async fn fetch(&self) -> Result<Vec<Check>, FetchError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            FetchError::new(
                FailureKind::Io,
                format!("{}: {}", self.path.display(), err),
            )
        })?;
        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}
