use super::{Task, TaskCategory, TaskDeadline};

/// A test deciding whether a task belongs in the filtered view.
///
/// The variant is chosen once when the filter is built; evaluating it never
/// looks back at the inputs that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskPredicate {
    #[default]
    ShowAll,
    /// Category equals the target (level and type).
    Category(TaskCategory),
    /// Deadline strictly before the target date.
    DeadlineBefore(TaskDeadline),
    CategoryAndDeadline(TaskCategory, TaskDeadline),
}

impl TaskPredicate {
    pub fn test(&self, task: &Task) -> bool {
        match self {
            Self::ShowAll => true,
            Self::Category(category) => task.category() == category,
            Self::DeadlineBefore(date) => task.deadline().is_before(date),
            Self::CategoryAndDeadline(category, date) => {
                task.category() == category && task.deadline().is_before(date)
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::ShowAll => "all tasks".to_string(),
            Self::Category(c) => format!("category {c}"),
            Self::DeadlineBefore(d) => format!("deadline before {d}"),
            Self::CategoryAndDeadline(c, d) => format!("category {c} and deadline before {d}"),
        }
    }
}
