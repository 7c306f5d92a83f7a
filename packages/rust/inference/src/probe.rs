//! Probe traits: the narrow capability surface the engine consumes.
//!
//! Two traits with one deliberate asymmetry: the external collaborator only
//! has to serve file content ([`FileProvider`]), while rules get the richer
//! [`Probes`] surface where `exists` is derived from `read`. One underlying
//! fetch therefore answers both questions for a given path, which is what
//! makes per-call memoization collapse every probe of a path into a single
//! round trip.

use async_trait::async_trait;

/// Read access to one (repository, commit) snapshot.
///
/// Implementations must normalize every transport or content error to
/// `None` — a probe is never allowed to surface a hard failure to the
/// engine. Logging the underlying cause is the provider's business.
#[async_trait]
pub trait FileProvider: Send + Sync {
    /// File content at a repository-relative path, or `None` if the file is
    /// missing or unreadable. May be arbitrarily slow.
    async fn read(&self, path: &str) -> Option<String>;
}

/// The probe surface detector rules see.
///
/// Paths are exact strings: no normalization, case handling, or separator
/// translation happens at this layer.
#[async_trait]
pub trait Probes: Send + Sync {
    /// File content at `path`, or `None` if missing or unreadable.
    async fn read(&self, path: &str) -> Option<String>;

    /// True iff a readable file exists at `path`.
    async fn exists(&self, path: &str) -> bool {
        self.read(path).await.is_some()
    }
}
