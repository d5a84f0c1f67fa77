#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]

//! # tasks-fix
//!
//! Subtask order repair for Task Master `tasks.json` files.
//!
//! Task expansion occasionally leaves a task's `subtasks` array out of `id`
//! order, which breaks the `<task>.<subtask>` numbering downstream tooling
//! relies on. This crate loads a tasks file, re-sorts each out-of-order
//! `subtasks` array into ascending numeric `id` order, and rewrites the file
//! in place. Every other field passes through untouched.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tasks_fix::{FileStorage, FixDomain};
//!
//! let storage = Arc::new(FileStorage::new("."));
//! let domain = FixDomain::new(storage);
//!
//! let summary = domain.fix(None, false).await?;
//! println!("fixed {} task(s)", summary.fixed_count());
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Subtask order normalization
pub mod normalize;

// Storage layer
pub mod storage;

// Domain facade
pub mod domain;

// Terminal UI helpers
pub mod ui;

// Re-export key types for convenience
pub use domain::FixDomain;
pub use entities::{DocumentFormat, FixSummary, TaskFix, TasksDocument};
pub use errors::{FixError, FixResult};
pub use storage::{FileStorage, Storage};
