//! In-memory probe fixtures shared by this crate's tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::probe::{FileProvider, Probes};

/// In-memory repository snapshot with per-path read counting and optional
/// artificial probe latency.
pub(crate) struct FakeRepo {
    files: HashMap<String, String>,
    latency: Option<Duration>,
    reads: Mutex<HashMap<String, usize>>,
}

impl FakeRepo {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            latency: None,
            reads: Mutex::new(HashMap::new()),
        }
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of times `path` was requested from this provider.
    pub fn reads_of(&self, path: &str) -> usize {
        *self.reads.lock().unwrap().get(path).unwrap_or(&0)
    }

    async fn lookup(&self, path: &str) -> Option<String> {
        *self
            .reads
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_insert(0) += 1;

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        self.files.get(path).cloned()
    }
}

#[async_trait]
impl FileProvider for FakeRepo {
    async fn read(&self, path: &str) -> Option<String> {
        self.lookup(path).await
    }
}

#[async_trait]
impl Probes for FakeRepo {
    async fn read(&self, path: &str) -> Option<String> {
        self.lookup(path).await
    }
}
