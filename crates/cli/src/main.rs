use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use task_core::{CoreConfig, FileTaskRepository, TaskService, DEFAULT_TASK_DATA_DIR};

#[derive(Parser)]
#[command(name = "task")]
#[command(about = "Task service CLI")]
struct Cli {
    /// Task data directory (defaults to $TASK_DATA_DIR, then "task_data")
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current task content
    Show,
    /// Write the stored task content
    Seed {
        /// Content to store
        content: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        std::env::var("TASK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TASK_DATA_DIR))
    });
    let cfg = Arc::new(CoreConfig::new(data_dir)?);
    let repository = FileTaskRepository::new(cfg);

    match cli.command {
        Some(Commands::Show) => {
            let service = TaskService::new(Arc::new(repository));
            match service.find() {
                Ok(task) => println!("{}", task.content),
                Err(e) => eprintln!("Error reading task: {}", e),
            }
        }
        Some(Commands::Seed { content }) => match repository.seed(&content) {
            Ok(()) => println!("Seeded task content"),
            Err(e) => eprintln!("Error seeding task: {}", e),
        },
        None => {
            println!("Use 'task --help' for commands");
        }
    }

    Ok(())
}
