//! Log file sweeping.

use crate::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Folder swept when none is given.
pub const DEFAULT_SWEEP_DIR: &str = "/tmp";

/// Files removed by a sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Removed paths, in directory order
    pub removed: Vec<PathBuf>,
}

/// How file names are selected for removal.
#[derive(Debug, Clone)]
enum Rule {
    Suffix(String),
    Pattern(Regex),
}

impl Rule {
    fn matches(&self, name: &str) -> bool {
        match self {
            Rule::Suffix(suffix) => name.ends_with(suffix.as_str()),
            Rule::Pattern(re) => re.is_match(name),
        }
    }
}

/// Deletes regular files whose names match a rule.
///
/// Only the top level of the folder is visited.
#[derive(Debug, Clone)]
pub struct LogSweeper {
    rule: Rule,
}

impl LogSweeper {
    /// Sweeper for `*.log` files.
    pub fn new() -> Self {
        Self {
            rule: Rule::Suffix(".log".to_string()),
        }
    }

    /// Sweeper matching file names against a regex.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            rule: Rule::Pattern(Regex::new(pattern)?),
        })
    }

    /// Remove every matching regular file directly inside `folder`.
    pub async fn sweep(&self, folder: impl AsRef<Path>) -> Result<SweepReport> {
        let folder = folder.as_ref();
        let mut report = SweepReport::default();
        let mut entries = fs::read_dir(folder).await?;

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            if !self.rule.matches(&name.to_string_lossy()) {
                continue;
            }

            // Symlinks count by their target; dangling links are skipped.
            let path = entry.path();
            match fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => {}
                _ => continue,
            }

            fs::remove_file(&path).await?;
            debug!(path = %path.display(), "Removed file");
            report.removed.push(path);
        }

        info!(folder = %folder.display(), removed = report.removed.len(), "Sweep complete");
        Ok(report)
    }
}

impl Default for LogSweeper {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove `*.log` files directly inside `folder`.
pub async fn delete_useless_files(folder: impl AsRef<Path>) -> Result<SweepReport> {
    LogSweeper::new().sweep(folder).await
}
