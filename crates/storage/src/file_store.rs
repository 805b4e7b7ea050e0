//! Filesystem output store.

use crate::{load_file, save_output, OutputStore, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Stores outputs as files under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store, creating the root directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Path an output name maps to.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[async_trait]
impl OutputStore for FileStore {
    async fn load(&self, name: &str) -> String {
        load_file(self.path_of(name)).await
    }

    async fn save(&self, name: &str, data: &str) -> Result<()> {
        save_output(data, self.path_of(name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_creates_root_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("runs")).await.unwrap();

        assert_eq!(store.load("report.json").await, "");
        store.save("report.json", "{}").await.unwrap();

        assert!(store.path_of("report.json").is_file());
        assert_eq!(store.load("report.json").await, "{}");
    }
}
