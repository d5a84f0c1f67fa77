//! tasks-fix CLI - subtask order repair for Task Master task files.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::disallowed_macros)]
#![allow(clippy::uninlined_format_args)]

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use tasks_fix::errors::FixError;
use tasks_fix::storage::{FileStorage, Storage};
use tasks_fix::{ui, FixDomain};

#[derive(Parser)]
#[command(name = "tasks-fix")]
#[command(about = "Repair subtask ordering in Task Master task files", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root directory
    #[arg(long)]
    project: Option<PathBuf>,

    /// Path to the tasks file (overrides --project)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Tag context (defaults to every tag in the file)
    #[arg(long)]
    tag: Option<String>,

    /// Report fixes without writing the file
    #[arg(long)]
    dry_run: bool,

    /// Emit the fix summary as JSON
    #[arg(long)]
    json: bool,
}

fn get_project_path(cli_path: Option<PathBuf>) -> PathBuf {
    cli_path.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), FixError> {
    let storage = match cli.file {
        Some(file) => FileStorage::with_file(file),
        None => FileStorage::new(get_project_path(cli.project)),
    };

    if !storage.exists().await? {
        return Err(FixError::MissingTasksFile {
            path: storage.tasks_file().display().to_string(),
        });
    }

    if !cli.json {
        ui::print_info(&format!("Checking {}", storage.tasks_file().display()));
    }

    let domain = FixDomain::new(Arc::new(storage));
    let summary = domain.fix(cli.tag.as_deref(), cli.dry_run).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        ui::print_summary(&summary);
    }

    Ok(())
}
