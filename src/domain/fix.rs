//! Fix domain facade.

use std::sync::Arc;

use crate::entities::FixSummary;
use crate::errors::{FixError, FixResult};
use crate::normalize;
use crate::storage::Storage;

/// Fix domain facade running the read-normalize-write cycle
pub struct FixDomain {
    storage: Arc<dyn Storage>,
}

impl FixDomain {
    /// Create a new fix domain
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Re-sort out-of-order subtask lists across the document.
    ///
    /// Processes every tag unless `tag` pins one. Unless `dry_run` is set,
    /// the document is written back even when nothing was fixed; the rewrite
    /// re-indents the file.
    pub async fn fix(&self, tag: Option<&str>, dry_run: bool) -> FixResult<FixSummary> {
        let mut doc = self.storage.load_document().await?;
        doc.check_shape()?;

        let tags = match tag {
            Some(name) => {
                if !doc.has_tag(name) {
                    return Err(FixError::TagNotFound {
                        name: name.to_string(),
                    });
                }
                vec![name.to_string()]
            }
            None => doc.tags(),
        };
        tracing::debug!(storage = self.storage.storage_type(), ?tags, "fixing subtask order");

        let mut summary = FixSummary {
            tags: tags.clone(),
            ..FixSummary::default()
        };

        for tag_name in &tags {
            let tasks = doc
                .tasks_mut(tag_name)
                .ok_or_else(|| FixError::UnexpectedShape {
                    reason: format!("tag '{tag_name}' has no tasks array"),
                })?;
            summary
                .fixes
                .extend(normalize::normalize_tasks(tasks, tag_name));
        }

        if !dry_run {
            self.storage.save_document(&doc).await?;
            summary.written = true;
        }

        Ok(summary)
    }
}
