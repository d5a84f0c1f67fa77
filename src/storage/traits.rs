//! Storage trait definitions.

use async_trait::async_trait;

use crate::entities::TasksDocument;
use crate::errors::FixResult;

/// Storage interface for tasks documents
#[async_trait]
pub trait Storage: Send + Sync {
    /// Get storage type identifier
    fn storage_type(&self) -> &'static str;

    /// Check whether a tasks document exists
    async fn exists(&self) -> FixResult<bool>;

    /// Load the tasks document
    async fn load_document(&self) -> FixResult<TasksDocument>;

    /// Save the tasks document
    async fn save_document(&self, doc: &TasksDocument) -> FixResult<()>;
}
