use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{Description, Email, Priority, TaskCategory, TaskDeadline, TaskName};

/// A unit of work in the task list.
///
/// Tasks are never mutated in place: edits build a new `Task` and the model
/// swaps it in. Identity is structural, so two tasks with the same fields
/// are the same task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    name: TaskName,
    category: TaskCategory,
    description: Description,
    priority: Priority,
    deadline: TaskDeadline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
    #[serde(default)]
    done: bool,
}

impl Task {
    pub fn new(
        name: TaskName,
        category: TaskCategory,
        description: Description,
        priority: Priority,
        deadline: TaskDeadline,
        email: Option<Email>,
        done: bool,
    ) -> Self {
        Self {
            name,
            category,
            description,
            priority,
            deadline,
            email,
            done,
        }
    }

    pub fn name(&self) -> &TaskName {
        &self.name
    }

    pub fn category(&self) -> &TaskCategory {
        &self.category
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn deadline(&self) -> &TaskDeadline {
        &self.deadline
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn status_str(&self) -> &'static str {
        if self.done {
            "done"
        } else {
            "open"
        }
    }
}

/// Orders open tasks before done ones; ties compare equal so a stable sort
/// keeps insertion order within each group.
pub fn compare_by_status(a: &Task, b: &Task) -> Ordering {
    a.done.cmp(&b.done)
}
