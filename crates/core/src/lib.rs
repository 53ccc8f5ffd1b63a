//! # Task Core
//!
//! Core business logic for the task service.
//!
//! This crate contains pure data operations:
//! - Task lookup through the repository boundary
//! - File-backed and in-memory task record storage
//! - Startup configuration for the task data directory
//!
//! **No API concerns**: HTTP servers, routing, and status mapping belong in
//! `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod repository;
pub mod service;

pub use config::CoreConfig;
pub use constants::DEFAULT_TASK_DATA_DIR;
pub use error::{TaskError, TaskResult};
pub use repository::{FileTaskRepository, FixedTaskRepository, TaskRecord, TaskRepository};
pub use service::{Task, TaskService};
