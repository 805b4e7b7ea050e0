//! Output store abstraction.

use async_trait::async_trait;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file-name pattern
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Named text outputs.
///
/// This trait allows different backends to hold run outputs.
#[async_trait]
pub trait OutputStore: Send + Sync {
    /// Load an output by name. Missing outputs read as the empty string.
    async fn load(&self, name: &str) -> String;

    /// Save an output, replacing any previous content.
    async fn save(&self, name: &str, data: &str) -> Result<()>;
}
