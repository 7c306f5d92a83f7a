//! Local-filesystem file provider.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use configscout_inference::FileProvider;
use configscout_shared::{ConfigScoutError, Result};

/// Serves repository files from a local checkout.
///
/// Probe failures of any kind — missing file, unreadable or non-UTF-8
/// content, a path escaping the root, a file over the size cap — are
/// normalized to an absent result here and logged at `debug`; the inference
/// engine never sees an error from this boundary.
pub(crate) struct LocalFileProvider {
    root: PathBuf,
    max_file_bytes: u64,
}

impl LocalFileProvider {
    pub fn new(root: &Path, max_file_bytes: u64) -> Result<Self> {
        if !root.is_dir() {
            return Err(ConfigScoutError::Provider(format!(
                "not a directory: {}",
                root.display()
            )));
        }
        Ok(Self {
            root: root.to_path_buf(),
            max_file_bytes,
        })
    }

    /// Resolve a repository-relative probe path, rejecting absolute paths
    /// and parent-directory traversal.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let rel = Path::new(path);
        if rel.is_absolute()
            || rel
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }
        Some(self.root.join(rel))
    }
}

#[async_trait]
impl FileProvider for LocalFileProvider {
    async fn read(&self, path: &str) -> Option<String> {
        let Some(full) = self.resolve(path) else {
            debug!(path, "probe path escapes repository root");
            return None;
        };

        let meta = match tokio::fs::metadata(&full).await {
            Ok(meta) => meta,
            Err(e) => {
                debug!(path, error = %e, "probe miss");
                return None;
            }
        };
        if !meta.is_file() {
            debug!(path, "probe target is not a regular file");
            return None;
        }
        if meta.len() > self.max_file_bytes {
            debug!(path, size = meta.len(), "file exceeds probe size cap");
            return None;
        }

        match tokio::fs::read_to_string(&full).await {
            Ok(content) => Some(content),
            Err(e) => {
                debug!(path, error = %e, "probe read failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configscout_inference::{ConfigGuesser, LearnedPaths};
    use std::sync::Arc;

    const DEFAULT_CAP: u64 = 1024 * 1024;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("go.mod"), "module example.com/app\n").unwrap();
        std::fs::create_dir(dir.path().join("bin")).unwrap();
        std::fs::write(dir.path().join("bin").join("setup"), "#!/bin/sh\n").unwrap();
        dir
    }

    #[tokio::test]
    async fn reads_existing_files_including_nested_paths() {
        let dir = fixture();
        let provider = LocalFileProvider::new(dir.path(), DEFAULT_CAP).unwrap();

        assert_eq!(
            provider.read("go.mod").await.as_deref(),
            Some("module example.com/app\n")
        );
        assert_eq!(
            provider.read("bin/setup").await.as_deref(),
            Some("#!/bin/sh\n")
        );
    }

    #[tokio::test]
    async fn missing_file_is_absent() {
        let dir = fixture();
        let provider = LocalFileProvider::new(dir.path(), DEFAULT_CAP).unwrap();
        assert!(provider.read("Cargo.toml").await.is_none());
    }

    #[tokio::test]
    async fn directory_is_absent() {
        let dir = fixture();
        let provider = LocalFileProvider::new(dir.path(), DEFAULT_CAP).unwrap();
        assert!(provider.read("bin").await.is_none());
    }

    #[tokio::test]
    async fn traversal_and_absolute_paths_are_absent() {
        let dir = fixture();
        let provider = LocalFileProvider::new(dir.path(), DEFAULT_CAP).unwrap();

        assert!(provider.read("../outside.txt").await.is_none());
        assert!(provider.read("/etc/hostname").await.is_none());
        assert!(provider.read("bin/../../outside.txt").await.is_none());
    }

    #[tokio::test]
    async fn oversize_file_is_absent() {
        let dir = fixture();
        let provider = LocalFileProvider::new(dir.path(), 8).unwrap();
        assert!(provider.read("go.mod").await.is_none());
    }

    #[tokio::test]
    async fn non_directory_root_is_rejected() {
        let dir = fixture();
        let file = dir.path().join("go.mod");
        assert!(LocalFileProvider::new(&file, DEFAULT_CAP).is_err());
    }

    #[tokio::test]
    async fn end_to_end_inference_over_local_checkout() {
        let dir = fixture();
        let provider = LocalFileProvider::new(dir.path(), DEFAULT_CAP).unwrap();

        let guesser = ConfigGuesser::new(LearnedPaths::new());
        let config = guesser
            .guess(Arc::new(provider))
            .await
            .expect("go repo recognized");

        let task = &config.tasks[0];
        assert_eq!(
            task.init.as_deref(),
            Some("go get && go build ./... && go test ./... && bin/setup")
        );
        assert_eq!(task.command.as_deref(), Some("go run ."));
    }
}
