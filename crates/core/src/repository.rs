//! Task record storage.
//!
//! This module defines the repository boundary the task service reads through,
//! plus the two shipped backends:
//!
//! - [`FileTaskRepository`] stores the task as a plain-text file under the
//!   configured task data directory (`<task_data_dir>/task.txt`).
//! - [`FixedTaskRepository`] holds a constant value in memory. It backs the
//!   `TASK_CONTENT` override and doubles as a stub in tests.
//!
//! ## Pure data operations
//!
//! This module contains **only** data operations. API-level concerns such as
//! HTTP status mapping belong in `api-rest`.

use crate::config::CoreConfig;
use crate::error::{TaskError, TaskResult};
use std::fs;
use std::sync::Arc;

/// Raw value returned by a repository lookup.
///
/// The service layer wraps this into a [`Task`](crate::service::Task); callers
/// outside the core should not depend on it directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRecord {
    pub content: String,
}

/// Read boundary for stored task records.
///
/// Implementations must be safe to share across request handlers, hence the
/// `Send + Sync` bound. `select()` returns the current record synchronously;
/// there is no query parameter because the store holds a single record.
pub trait TaskRepository: Send + Sync {
    /// Fetch the current task record.
    ///
    /// # Errors
    ///
    /// Returns `TaskError` if the record is missing or cannot be read.
    fn select(&self) -> TaskResult<TaskRecord>;
}

/// Repository backed by a plain-text file resolved through [`CoreConfig`].
#[derive(Clone, Debug)]
pub struct FileTaskRepository {
    cfg: Arc<CoreConfig>,
}

impl FileTaskRepository {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Write the stored task record, creating the data directory if needed.
    ///
    /// This is a provisioning operation used by the CLI and tests; the task
    /// service itself only ever reads.
    ///
    /// # Errors
    ///
    /// Returns `TaskError` if the data directory cannot be created or the
    /// task file cannot be written.
    pub fn seed(&self, content: &str) -> TaskResult<()> {
        fs::create_dir_all(self.cfg.task_data_dir()).map_err(TaskError::StorageDirCreation)?;
        fs::write(self.cfg.task_file(), content).map_err(TaskError::FileWrite)?;
        Ok(())
    }
}

impl TaskRepository for FileTaskRepository {
    fn select(&self) -> TaskResult<TaskRecord> {
        let path = self.cfg.task_file();
        tracing::debug!("reading task record from {}", path.display());

        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TaskError::NotFound { path: path.clone() }
            } else {
                TaskError::FileRead(e)
            }
        })?;

        Ok(TaskRecord { content })
    }
}

/// Repository holding a constant in-memory value.
#[derive(Clone, Debug)]
pub struct FixedTaskRepository {
    content: String,
}

impl FixedTaskRepository {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl TaskRepository for FixedTaskRepository {
    fn select(&self) -> TaskResult<TaskRecord> {
        Ok(TaskRecord {
            content: self.content.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn file_repo(dir: &TempDir) -> FileTaskRepository {
        let cfg = CoreConfig::new(dir.path().to_path_buf()).unwrap();
        FileTaskRepository::new(Arc::new(cfg))
    }

    #[test]
    fn test_seed_then_select_round_trips() {
        let temp = TempDir::new().unwrap();
        let repo = file_repo(&temp);

        repo.seed("write the report").unwrap();
        let record = repo.select().unwrap();
        assert_eq!(record.content, "write the report");
    }

    #[test]
    fn test_select_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let repo = file_repo(&temp);

        let err = repo.select().unwrap_err();
        assert!(matches!(err, TaskError::NotFound { .. }));
    }

    #[test]
    fn test_seed_creates_missing_data_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("nested").join("task_data");
        let cfg = CoreConfig::new(nested.clone()).unwrap();
        let repo = FileTaskRepository::new(Arc::new(cfg));

        repo.seed("hello").unwrap();
        assert!(nested.join("task.txt").is_file());
        assert_eq!(repo.select().unwrap().content, "hello");
    }

    #[test]
    fn test_empty_content_is_a_valid_record() {
        let temp = TempDir::new().unwrap();
        let repo = file_repo(&temp);

        repo.seed("").unwrap();
        assert_eq!(repo.select().unwrap().content, "");
    }

    #[test]
    fn test_fixed_repository_returns_constant() {
        let repo = FixedTaskRepository::new("hello");
        assert_eq!(repo.select().unwrap().content, "hello");
        assert_eq!(repo.select().unwrap().content, "hello");
    }

    #[test]
    fn test_not_found_error_names_path() {
        let cfg = CoreConfig::new(PathBuf::from("no-such-dir")).unwrap();
        let repo = FileTaskRepository::new(Arc::new(cfg));

        let err = repo.select().unwrap_err();
        assert!(err.to_string().contains("task.txt"));
    }
}
