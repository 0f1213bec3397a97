use tracing::debug;

use crate::error::TaskbookError;
use crate::model::TaskModel;
use crate::models::{TaskCategory, TaskDeadline, TaskPredicate};

use super::{Command, CommandResult};

/// What to filter the task list by: a category, a date, or both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterTaskDescriptor {
    category: Option<TaskCategory>,
    date: Option<TaskDeadline>,
}

impl FilterTaskDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_date(mut self, date: TaskDeadline) -> Self {
        self.date = Some(date);
        self
    }

    pub fn category(&self) -> Option<&TaskCategory> {
        self.category.as_ref()
    }

    pub fn date(&self) -> Option<&TaskDeadline> {
        self.date.as_ref()
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.category.is_some() || self.date.is_some()
    }

    /// Picks the predicate matching the fields that are set.
    pub fn to_predicate(&self) -> Result<TaskPredicate, TaskbookError> {
        match (self.category, self.date) {
            (Some(category), Some(date)) => Ok(TaskPredicate::CategoryAndDeadline(category, date)),
            (Some(category), None) => Ok(TaskPredicate::Category(category)),
            (None, Some(date)) => Ok(TaskPredicate::DeadlineBefore(date)),
            (None, None) => Err(TaskbookError::empty_filter()),
        }
    }
}

/// Narrows the visible task list to the tasks matching a descriptor.
///
/// Commands compare equal when their descriptors do.
#[derive(Debug, Clone)]
pub struct FilterTaskCommand {
    descriptor: FilterTaskDescriptor,
    predicate: TaskPredicate,
}

impl FilterTaskCommand {
    pub fn new(descriptor: FilterTaskDescriptor) -> Result<Self, TaskbookError> {
        let predicate = descriptor.to_predicate()?;
        debug!(filter = %predicate.describe(), "filter predicate selected");
        Ok(Self {
            descriptor,
            predicate,
        })
    }

    pub fn descriptor(&self) -> &FilterTaskDescriptor {
        &self.descriptor
    }

    pub fn predicate(&self) -> &TaskPredicate {
        &self.predicate
    }
}

impl PartialEq for FilterTaskCommand {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor == other.descriptor
    }
}

impl Eq for FilterTaskCommand {}

impl Command for FilterTaskCommand {
    fn execute(&self, model: &mut TaskModel) -> Result<CommandResult, TaskbookError> {
        let count = model.update_filtered_task_list(self.predicate);
        Ok(CommandResult::listed(count))
    }

    fn mutates(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::models::task::fixtures::{backend_task, frontend_task};
    use crate::models::TaskCategoryType;

    fn backend() -> TaskCategory {
        TaskCategory::new(2, TaskCategoryType::Backend)
    }

    fn date(s: &str) -> TaskDeadline {
        TaskDeadline::parse(s).unwrap()
    }

    #[test]
    fn any_field_edited_tracks_presence() {
        assert!(!FilterTaskDescriptor::new().is_any_field_edited());
        assert!(FilterTaskDescriptor::new().with_category(backend()).is_any_field_edited());
        assert!(FilterTaskDescriptor::new().with_date(date("2022-01-01")).is_any_field_edited());
    }

    #[test]
    fn selects_one_predicate_per_field_combination() {
        let c = FilterTaskCommand::new(FilterTaskDescriptor::new().with_category(backend())).unwrap();
        assert_eq!(*c.predicate(), TaskPredicate::Category(backend()));

        let d = FilterTaskCommand::new(FilterTaskDescriptor::new().with_date(date("2022-12-11"))).unwrap();
        assert_eq!(*d.predicate(), TaskPredicate::DeadlineBefore(date("2022-12-11")));

        let both = FilterTaskCommand::new(
            FilterTaskDescriptor::new()
                .with_category(backend())
                .with_date(date("2022-12-13")),
        )
        .unwrap();
        assert_eq!(
            *both.predicate(),
            TaskPredicate::CategoryAndDeadline(backend(), date("2022-12-13"))
        );
    }

    #[test]
    fn empty_descriptor_is_rejected() {
        let err = FilterTaskCommand::new(FilterTaskDescriptor::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyFilter);
    }

    #[test]
    fn equality_follows_descriptor() {
        let a = FilterTaskCommand::new(FilterTaskDescriptor::new().with_category(backend())).unwrap();
        let b = FilterTaskCommand::new(FilterTaskDescriptor::new().with_category(backend())).unwrap();
        let c = FilterTaskCommand::new(
            FilterTaskDescriptor::new().with_category(TaskCategory::new(3, TaskCategoryType::Backend)),
        )
        .unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn execute_reports_visible_count() {
        let cases = [
            (FilterTaskDescriptor::new().with_category(backend()), 1),
            (FilterTaskDescriptor::new().with_date(date("2022-12-11")), 1),
            (FilterTaskDescriptor::new().with_date(date("2023-01-01")), 2),
            (
                FilterTaskDescriptor::new()
                    .with_category(backend())
                    .with_date(date("2022-12-13")),
                1,
            ),
            (
                FilterTaskDescriptor::new()
                    .with_category(backend())
                    .with_date(date("2022-12-12")),
                0,
            ),
        ];
        for (descriptor, expected) in cases {
            let mut model = TaskModel::new(vec![backend_task(), frontend_task()]).unwrap();
            let result = FilterTaskCommand::new(descriptor).unwrap().execute(&mut model).unwrap();
            assert_eq!(result.tasks_listed, Some(expected), "{descriptor:?}");
            assert_eq!(model.filtered_task_list().len(), expected);
            assert_eq!(result.feedback, format!("{expected} tasks listed!"));
        }
    }

    #[test]
    fn backend_task_against_reference_filters() {
        let task = backend_task();
        let by_category = FilterTaskDescriptor::new().with_category(backend()).to_predicate().unwrap();
        let by_day_before = FilterTaskDescriptor::new().with_date(date("2022-12-11")).to_predicate().unwrap();
        let by_both = FilterTaskDescriptor::new()
            .with_category(backend())
            .with_date(date("2022-12-13"))
            .to_predicate()
            .unwrap();
        assert!(by_category.test(&task));
        assert!(!by_day_before.test(&task));
        assert!(by_both.test(&task));
    }
}
