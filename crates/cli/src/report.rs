//! Run report files.

use std::path::{Path, PathBuf};

use agentnet_execution::RunReport;
use agentnet_storage::{FileStore, OutputStore};

/// Split an output path into the store directory and the file name.
///
/// A bare file name lives in the working directory.
pub fn split_output_path(path: &Path) -> anyhow::Result<(PathBuf, String)> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid output path: {}", path.display()))?;
    Ok((dir, name.to_string()))
}

/// Save a run report as pretty JSON, creating parent directories.
pub async fn write_report(report: &RunReport, path: &Path) -> anyhow::Result<()> {
    let (dir, name) = split_output_path(path)?;
    let store = FileStore::new(&dir).await?;
    store.save(&name, &serde_json::to_string_pretty(report)?).await?;
    Ok(())
}

/// Load a report saved by [`write_report`].
pub async fn read_report(path: &Path) -> anyhow::Result<RunReport> {
    let (dir, name) = split_output_path(path)?;
    let store = FileStore::new(&dir).await?;
    let text = store.load(&name).await;
    if text.is_empty() {
        anyhow::bail!("No report at {}", path.display());
    }
    Ok(serde_json::from_str(&text)?)
}
