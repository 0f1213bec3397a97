//! Commands that act on the task model.
//!
//! Each command is built from already-validated values, checks its own
//! preconditions at construction, and performs exactly one logical change
//! when executed.

pub mod edit;
pub mod filter;
pub mod task;

use std::num::NonZeroUsize;

use crate::error::TaskbookError;
use crate::model::TaskModel;
use crate::models::Task;

pub use edit::*;
pub use filter::*;
pub use task::*;

pub trait Command {
    fn execute(&self, model: &mut TaskModel) -> Result<CommandResult, TaskbookError>;

    /// Whether a successful run changes the stored task list.
    fn mutates(&self) -> bool {
        true
    }
}

/// What a command hands back for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub task: Option<Task>,
    pub tasks_listed: Option<usize>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            task: None,
            tasks_listed: None,
        }
    }

    pub fn with_task(feedback: impl Into<String>, task: Task) -> Self {
        Self {
            task: Some(task),
            ..Self::new(feedback)
        }
    }

    pub fn listed(count: usize) -> Self {
        Self {
            tasks_listed: Some(count),
            ..Self::new(format!("{count} tasks listed!"))
        }
    }
}

/// A 1-based position in the currently visible task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskIndex(NonZeroUsize);

impl TaskIndex {
    pub fn from_one_based(index: usize) -> Result<Self, TaskbookError> {
        NonZeroUsize::new(index)
            .map(Self)
            .ok_or_else(|| TaskbookError::validation("Task index must be a positive integer"))
    }

    pub fn one_based(&self) -> usize {
        self.0.get()
    }

    pub fn zero_based(&self) -> usize {
        self.0.get() - 1
    }
}

/// Looks up the task shown at `index` in the filtered view.
pub(crate) fn task_at(model: &TaskModel, index: TaskIndex) -> Result<Task, TaskbookError> {
    let visible = model.filtered_task_list();
    visible
        .get(index.zero_based())
        .map(|t| (*t).clone())
        .ok_or_else(|| TaskbookError::invalid_index(index.one_based(), visible.len()))
}
