use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{app, AppState};
use task_core::{
    CoreConfig, FileTaskRepository, FixedTaskRepository, TaskRepository, TaskService,
    DEFAULT_TASK_DATA_DIR,
};

/// Main entry point for the task service
///
/// Wires the repository into the task service, builds the REST router, and
/// serves it on the configured address (default: 0.0.0.0:3000).
///
/// # Environment Variables
/// - `TASK_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `TASK_DATA_DIR`: Directory holding the stored task record (default: "task_data")
/// - `TASK_CONTENT`: When set, serve this fixed value from memory instead of
///   reading the task file
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("task_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("TASK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting Task REST API on {}", addr);

    let task_data_dir =
        std::env::var("TASK_DATA_DIR").unwrap_or_else(|_| DEFAULT_TASK_DATA_DIR.into());
    let cfg = Arc::new(CoreConfig::new(PathBuf::from(task_data_dir))?);

    let repository: Arc<dyn TaskRepository> = match std::env::var("TASK_CONTENT") {
        Ok(content) => Arc::new(FixedTaskRepository::new(content)),
        Err(_) => Arc::new(FileTaskRepository::new(cfg)),
    };

    let state = AppState {
        task_service: TaskService::new(repository),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
