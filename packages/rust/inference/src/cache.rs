//! The learning prefetch cache around a raw file provider.
//!
//! Two layers with different lifetimes:
//!
//! - [`ProbeCache`] lives for one inference call. It memoizes probe results
//!   per path, sharing a single in-flight request among all concurrent
//!   callers of the same path, so each distinct path hits the underlying
//!   provider at most once per call.
//! - [`LearnedPaths`] lives for the process. It records every path ever
//!   probed, so later calls can fire all historically relevant probes in
//!   parallel up front ([`ConfigGuesser::guess`]) while the rule engine
//!   walks them sequentially. After warm-up the sequential round-trip cost
//!   collapses to roughly the single slowest probe in the burst.
//!
//! The burst is purely a latency hint: the engine's own probes are always
//! the source of truth, and an empty learned set (first call of a process)
//! just means no prefetch happens.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use configscout_shared::WorkspaceConfig;

use crate::engine::ConfigInferrer;
use crate::probe::{FileProvider, Probes};

// ---------------------------------------------------------------------------
// LearnedPaths
// ---------------------------------------------------------------------------

/// Process-wide set of every path ever probed, across all inference calls.
///
/// Append-only and cheap to clone (shared handle). Purely a performance
/// hint: losing it only degrades latency, never correctness. Injectable so
/// tests and embedders control its scope instead of relying on a global.
#[derive(Clone, Default)]
pub struct LearnedPaths {
    inner: Arc<Mutex<HashSet<String>>>,
}

impl LearnedPaths {
    /// Empty learned set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a probed path. Safe under concurrent writers.
    pub fn record(&self, path: &str) {
        let mut set = self.inner.lock().expect("learned-path set poisoned");
        if !set.contains(path) {
            set.insert(path.to_string());
        }
    }

    /// Snapshot of all learned paths.
    pub fn snapshot(&self) -> Vec<String> {
        let set = self.inner.lock().expect("learned-path set poisoned");
        set.iter().cloned().collect()
    }

    /// Number of learned paths.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("learned-path set poisoned").len()
    }

    /// True when nothing has been learned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// ProbeCache
// ---------------------------------------------------------------------------

/// Per-call memoizing wrapper around a [`FileProvider`].
///
/// Each path maps to one shared cell; concurrent requests for the same path
/// (the prefetch burst racing the rule engine) collapse into one underlying
/// read, with every requester sharing the result. Owned by exactly one
/// inference call, never reused.
pub struct ProbeCache {
    provider: Arc<dyn FileProvider>,
    learned: LearnedPaths,
    cells: Mutex<HashMap<String, Arc<OnceCell<Option<String>>>>>,
}

impl ProbeCache {
    pub fn new(provider: Arc<dyn FileProvider>, learned: LearnedPaths) -> Self {
        Self {
            provider,
            learned,
            cells: Mutex::new(HashMap::new()),
        }
    }

    fn cell_for(&self, path: &str) -> Arc<OnceCell<Option<String>>> {
        let mut cells = self.cells.lock().expect("memoization map poisoned");
        Arc::clone(cells.entry(path.to_string()).or_default())
    }

    async fn fetch(&self, path: &str) -> Option<String> {
        self.learned.record(path);
        let cell = self.cell_for(path);
        cell.get_or_init(|| self.provider.read(path)).await.clone()
    }
}

#[async_trait]
impl Probes for ProbeCache {
    async fn read(&self, path: &str) -> Option<String> {
        self.fetch(path).await
    }
}

// ---------------------------------------------------------------------------
// ConfigGuesser
// ---------------------------------------------------------------------------

/// Public entry point: infer a configuration for one repository snapshot,
/// amortizing probe latency across calls via [`LearnedPaths`].
pub struct ConfigGuesser {
    inferrer: ConfigInferrer,
    learned: LearnedPaths,
}

impl ConfigGuesser {
    /// Guesser with the built-in rule set, sharing the given learned set.
    pub fn new(learned: LearnedPaths) -> Self {
        Self {
            inferrer: ConfigInferrer::new(),
            learned,
        }
    }

    /// Guesser with a custom inferrer.
    pub fn with_inferrer(inferrer: ConfigInferrer, learned: LearnedPaths) -> Self {
        Self { inferrer, learned }
    }

    /// The learned-path set this guesser records into.
    pub fn learned(&self) -> &LearnedPaths {
        &self.learned
    }

    /// Probe the repository and infer a configuration.
    ///
    /// Returns `None` when no rule contributed anything — a valid, expected
    /// outcome for unrecognized layouts, distinct from an empty config.
    /// Never errors: probe failures are absent results and rule failures
    /// are contained by the engine.
    pub async fn guess(&self, provider: Arc<dyn FileProvider>) -> Option<WorkspaceConfig> {
        let cache = Arc::new(ProbeCache::new(provider, self.learned.clone()));

        // Prefetch burst: fire a read for every previously learned path
        // without awaiting it. The detached tasks run to completion and
        // populate the shared memoization cells; results nobody consumes
        // are simply dropped.
        let warm = self.learned.snapshot();
        debug!(paths = warm.len(), "prefetching learned probe paths");
        for path in warm {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move {
                let _ = cache.read(&path).await;
            });
        }

        let config = self.inferrer.infer(cache.as_ref()).await;
        if config.is_empty() {
            debug!("no rule contributed, nothing to suggest");
            None
        } else {
            Some(config)
        }
    }
}
