//! Subtask order normalization.
//!
//! Pure functions over raw JSON task records. Records are never copied or
//! re-shaped; only the order of the `subtasks` array changes.

use serde_json::Value;

use crate::entities::TaskFix;

/// Sort key for a subtask record.
///
/// A missing or non-integer `id` compares as 0; the stored value itself is
/// left as-is.
pub fn sort_key(subtask: &Value) -> i64 {
    subtask.get("id").and_then(Value::as_i64).unwrap_or(0)
}

/// Whether the subtask `id` sequence is already non-decreasing
pub fn ids_sorted(subtasks: &[Value]) -> bool {
    subtasks
        .windows(2)
        .all(|pair| sort_key(&pair[0]) <= sort_key(&pair[1]))
}

/// Re-sort a task's subtasks in place.
///
/// Returns the subtask count when a re-sort happened, `None` for tasks that
/// are already in order or carry no subtasks.
pub fn normalize_task(task: &mut Value) -> Option<usize> {
    let subtasks = task.get_mut("subtasks").and_then(Value::as_array_mut)?;
    if subtasks.is_empty() || ids_sorted(subtasks) {
        return None;
    }

    // Vec::sort_by_key is stable: equal ids keep their relative order.
    subtasks.sort_by_key(sort_key);
    Some(subtasks.len())
}

/// Normalize every task in a tag's task list, collecting fix records
pub fn normalize_tasks(tasks: &mut [Value], tag: &str) -> Vec<TaskFix> {
    let mut fixes = Vec::new();

    for task in tasks.iter_mut() {
        let task_id = display_id(task);
        if let Some(count) = normalize_task(task) {
            tracing::debug!(tag, task_id = %task_id, count, "re-sorted subtasks");
            fixes.push(TaskFix {
                tag: tag.to_string(),
                task_id,
                subtask_count: count,
            });
        }
    }

    fixes
}

/// Render a task's `id` for reporting (any JSON type)
fn display_id(task: &Value) -> String {
    match task.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "?".to_string(),
    }
}
