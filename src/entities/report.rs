//! Fix report types.

use serde::{Deserialize, Serialize};

/// Record of one task whose subtasks were re-sorted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskFix {
    /// Tag the task belongs to
    pub tag: String,

    /// Task identifier, rendered for display
    #[serde(rename = "taskId")]
    pub task_id: String,

    /// Number of subtasks in the re-sorted list
    #[serde(rename = "subtaskCount")]
    pub subtask_count: usize,
}

/// Summary of a full fix run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixSummary {
    /// Tags that were processed
    pub tags: Vec<String>,

    /// Tasks that required a re-sort
    pub fixes: Vec<TaskFix>,

    /// Whether the file was written back
    pub written: bool,
}

impl FixSummary {
    /// Number of tasks that required fixing
    pub fn fixed_count(&self) -> usize {
        self.fixes.len()
    }
}
