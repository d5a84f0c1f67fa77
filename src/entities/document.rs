//! Tasks document model.

use serde_json::Value;

use crate::errors::{FixError, FixResult};

/// On-disk layout of a tasks.json document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `{ "tasks": [...], "metadata": {...} }`
    Standard,
    /// `{ "master": { "tasks": [...] }, "feature": { "tasks": [...] } }`
    Tagged,
}

/// Parsed tasks.json document.
///
/// The document is held as raw JSON so unknown fields, non-integer `id`
/// values, and object key order all pass through a rewrite untouched.
#[derive(Debug, Clone)]
pub struct TasksDocument {
    data: Value,
}

impl TasksDocument {
    /// Wrap a parsed JSON value
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Borrow the underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.data
    }

    /// Unwrap into the underlying JSON value
    pub fn into_value(self) -> Value {
        self.data
    }

    /// Shape check: the document root must be a JSON object
    pub fn check_shape(&self) -> FixResult<()> {
        if self.data.is_object() {
            Ok(())
        } else {
            Err(FixError::UnexpectedShape {
                reason: "document root is not an object".to_string(),
            })
        }
    }

    /// Detect format of the document (legacy standard vs tagged)
    pub fn format(&self) -> DocumentFormat {
        if self.data.get("tasks").is_some() && self.data.get("metadata").is_some() {
            return DocumentFormat::Standard;
        }
        if let Some(obj) = self.data.as_object() {
            // Any key that is not "tasks" or "metadata" means tagged format
            if obj.keys().any(|k| k != "tasks" && k != "metadata") {
                return DocumentFormat::Tagged;
            }
        }
        DocumentFormat::Standard
    }

    /// All tags present in the document
    pub fn tags(&self) -> Vec<String> {
        match self.format() {
            DocumentFormat::Standard => vec!["master".to_string()],
            DocumentFormat::Tagged => self
                .data
                .as_object()
                .map(|obj| obj.keys().cloned().collect())
                .unwrap_or_default(),
        }
    }

    /// Whether the tag has an entry in the document
    pub fn has_tag(&self, tag: &str) -> bool {
        match self.format() {
            DocumentFormat::Standard => tag == "master",
            DocumentFormat::Tagged => self.data.get(tag).is_some(),
        }
    }

    /// Mutable access to a tag's task array.
    ///
    /// Returns `None` when the tag or its `tasks` array is absent.
    pub fn tasks_mut(&mut self, tag: &str) -> Option<&mut Vec<Value>> {
        let entry = match self.format() {
            DocumentFormat::Standard if tag == "master" => self.data.get_mut("tasks"),
            DocumentFormat::Standard => None,
            DocumentFormat::Tagged => self.data.get_mut(tag).and_then(|t| t.get_mut("tasks")),
        };
        entry.and_then(Value::as_array_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_standard_format() {
        let doc = TasksDocument::new(json!({"tasks": [], "metadata": {}}));
        assert_eq!(doc.format(), DocumentFormat::Standard);
        assert_eq!(doc.tags(), vec!["master".to_string()]);
    }

    #[test]
    fn test_detect_tagged_format() {
        let doc = TasksDocument::new(json!({"tdd": {"tasks": []}, "master": {"tasks": []}}));
        assert_eq!(doc.format(), DocumentFormat::Tagged);
        assert_eq!(doc.tags().len(), 2);
        assert!(doc.has_tag("tdd"));
        assert!(!doc.has_tag("feature"));
    }

    #[test]
    fn test_tasks_mut_standard() {
        let mut doc = TasksDocument::new(json!({"tasks": [{"id": 1}], "metadata": {}}));
        assert_eq!(doc.tasks_mut("master").unwrap().len(), 1);
        assert!(doc.tasks_mut("other").is_none());
    }

    #[test]
    fn test_tasks_mut_tagged() {
        let mut doc = TasksDocument::new(json!({"tdd": {"tasks": [{"id": 1}, {"id": 2}]}}));
        assert_eq!(doc.tasks_mut("tdd").unwrap().len(), 2);
        assert!(doc.tasks_mut("master").is_none());
    }

    #[test]
    fn test_missing_tasks_array() {
        let mut doc = TasksDocument::new(json!({"tdd": {"metadata": {}}}));
        assert!(doc.has_tag("tdd"));
        assert!(doc.tasks_mut("tdd").is_none());
    }

    #[test]
    fn test_check_shape() {
        assert!(TasksDocument::new(json!({})).check_shape().is_ok());
        assert!(TasksDocument::new(json!([1, 2])).check_shape().is_err());
    }
}
