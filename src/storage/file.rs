//! File-based storage implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use super::traits::Storage;
use crate::entities::TasksDocument;
use crate::errors::{FixError, FixResult};

/// File-based storage for Task Master task files
pub struct FileStorage {
    /// Path to tasks.json
    tasks_file: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at a project directory.
    ///
    /// Uses `.taskmaster/tasks/tasks.json` under the project root, the
    /// layout Task Master writes.
    pub fn new(project_path: impl AsRef<Path>) -> Self {
        let tasks_file = project_path
            .as_ref()
            .join(".taskmaster")
            .join("tasks")
            .join("tasks.json");
        Self { tasks_file }
    }

    /// Create storage for an explicit tasks file path
    pub fn with_file(tasks_file: impl Into<PathBuf>) -> Self {
        Self {
            tasks_file: tasks_file.into(),
        }
    }

    /// Path to the tasks file
    pub fn tasks_file(&self) -> &Path {
        &self.tasks_file
    }

    fn temp_file(&self) -> PathBuf {
        self.tasks_file.with_extension("json.tmp")
    }
}

#[async_trait]
impl Storage for FileStorage {
    fn storage_type(&self) -> &'static str {
        "file"
    }

    async fn exists(&self) -> FixResult<bool> {
        Ok(self.tasks_file.exists())
    }

    async fn load_document(&self) -> FixResult<TasksDocument> {
        let content =
            fs::read_to_string(&self.tasks_file)
                .await
                .map_err(|e| FixError::FileReadError {
                    path: self.tasks_file.display().to_string(),
                    reason: e.to_string(),
                })?;

        let data: Value = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.tasks_file.display(), "loaded tasks file");
        Ok(TasksDocument::new(data))
    }

    async fn save_document(&self, doc: &TasksDocument) -> FixResult<()> {
        let content = serde_json::to_string_pretty(doc.as_value())?;

        // Write to a sibling temp file, then rename over the original.
        // An interrupted run never leaves a truncated tasks.json.
        let temp_file = self.temp_file();
        fs::write(&temp_file, &content)
            .await
            .map_err(|e| FixError::FileWriteError {
                path: temp_file.display().to_string(),
                reason: e.to_string(),
            })?;

        fs::rename(&temp_file, &self.tasks_file)
            .await
            .map_err(|e| FixError::FileWriteError {
                path: self.tasks_file.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(path = %self.tasks_file.display(), "wrote tasks file");
        Ok(())
    }
}
