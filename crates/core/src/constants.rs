//! Constants used throughout the task core crate.

/// Default directory for task data storage when no explicit directory is configured.
pub const DEFAULT_TASK_DATA_DIR: &str = "task_data";

/// Filename for the stored task record.
pub const TASK_FILENAME: &str = "task.txt";
