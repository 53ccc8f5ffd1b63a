//! Task lookup service.
//!
//! Thin pass-through between the API surface and the repository: one lookup
//! per call, no caching, no validation, no transformation beyond extracting
//! the record's content.

use crate::error::TaskResult;
use crate::repository::TaskRepository;
use std::sync::Arc;

/// Immutable task value constructed fresh on each lookup.
///
/// `content` may be empty; the repository contract does not guarantee
/// non-emptiness and callers must handle an empty value gracefully.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub content: String,
}

/// Service for task lookups.
///
/// The repository is an explicit constructor argument rather than anything
/// resolved from ambient state, so callers control exactly which backend a
/// service instance reads through.
#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the current task.
    ///
    /// Calls the repository's `select()` exactly once and wraps the returned
    /// record's content into a [`Task`].
    ///
    /// # Errors
    ///
    /// Any repository error propagates unchanged.
    pub fn find(&self) -> TaskResult<Task> {
        let record = self.repository.select()?;
        Ok(Task {
            content: record.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::repository::{FixedTaskRepository, TaskRecord};

    struct FailingRepository;

    impl TaskRepository for FailingRepository {
        fn select(&self) -> TaskResult<TaskRecord> {
            Err(TaskError::NotFound {
                path: "task_data/task.txt".into(),
            })
        }
    }

    #[test]
    fn test_find_wraps_record_content() {
        let service = TaskService::new(Arc::new(FixedTaskRepository::new("hello")));
        let task = service.find().unwrap();
        assert_eq!(task.content, "hello");
    }

    #[test]
    fn test_find_preserves_empty_content() {
        let service = TaskService::new(Arc::new(FixedTaskRepository::new("")));
        assert_eq!(service.find().unwrap().content, "");
    }

    #[test]
    fn test_find_propagates_repository_error() {
        let service = TaskService::new(Arc::new(FailingRepository));
        let err = service.find().unwrap_err();
        assert!(matches!(err, TaskError::NotFound { .. }));
    }

    #[test]
    fn test_find_is_idempotent_against_unchanged_store() {
        let service = TaskService::new(Arc::new(FixedTaskRepository::new("same")));
        assert_eq!(service.find().unwrap(), service.find().unwrap());
    }
}
