//! Plain file helpers.

use crate::Result;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// File name used when no output name is given.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Read a file as text.
///
/// Returns the empty string when the path does not exist or cannot be read.
pub async fn load_file(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Unreadable file treated as empty");
            String::new()
        }
    }
}

/// Write `data` to `filename`, overwriting it.
pub async fn save_output(data: &str, filename: impl AsRef<Path>) -> Result<()> {
    let filename = filename.as_ref();
    fs::write(filename, data).await?;
    debug!(path = %filename.display(), bytes = data.len(), "Saved output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_file(dir.path().join("absent.txt")).await, "");
    }

    #[tokio::test]
    async fn test_directory_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_file(dir.path()).await, "");
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);

        save_output("first", &path).await.unwrap();
        save_output("second", &path).await.unwrap();

        assert_eq!(load_file(&path).await, "second");
    }

    #[tokio::test]
    async fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("out.txt");
        assert!(save_output("x", &path).await.is_err());
    }
}
