//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core
//! services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in
//! multi-threaded runtimes and test harnesses.

use crate::constants::TASK_FILENAME;
use crate::error::{TaskError, TaskResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    task_data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidInput`] if `task_data_dir` is empty.
    pub fn new(task_data_dir: PathBuf) -> TaskResult<Self> {
        if task_data_dir.as_os_str().is_empty() {
            return Err(TaskError::InvalidInput(
                "task_data_dir cannot be empty".into(),
            ));
        }

        Ok(Self { task_data_dir })
    }

    pub fn task_data_dir(&self) -> &Path {
        &self.task_data_dir
    }

    /// Path of the file holding the stored task record.
    pub fn task_file(&self) -> PathBuf {
        self.task_data_dir.join(TASK_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_file_joins_filename() {
        let cfg = CoreConfig::new(PathBuf::from("task_data")).unwrap();
        assert_eq!(cfg.task_file(), PathBuf::from("task_data").join("task.txt"));
    }

    #[test]
    fn test_empty_data_dir_rejected() {
        let err = CoreConfig::new(PathBuf::new()).unwrap_err();
        assert!(matches!(err, TaskError::InvalidInput(_)));
    }
}
