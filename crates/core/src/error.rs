#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("task record not found: {}", path.display())]
    NotFound { path: std::path::PathBuf },
    #[error("failed to read task file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write task file: {0}")]
    FileWrite(std::io::Error),
}

pub type TaskResult<T> = std::result::Result<T, TaskError>;
