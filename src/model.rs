//! The in-memory task list and its filtered view.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::TaskbookError;
use crate::models::{compare_by_status, Task, TaskPredicate};

/// Owns every task plus the predicate that decides which of them are
/// visible. Commands are the only writers.
#[derive(Debug, Clone, Default)]
pub struct TaskModel {
    tasks: Vec<Task>,
    predicate: TaskPredicate,
}

impl TaskModel {
    /// Fails with `DuplicateTask` if two tasks are equal: tasks have no id,
    /// so equal rows could not be told apart by later edits or deletes.
    pub fn new(tasks: Vec<Task>) -> Result<Self, TaskbookError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        if !tasks.iter().all(|t| seen.insert(t)) {
            return Err(TaskbookError::duplicate_task());
        }
        Ok(Self {
            tasks,
            predicate: TaskPredicate::ShowAll,
        })
    }

    /// Every task in insertion order, ignoring the active predicate.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn predicate(&self) -> &TaskPredicate {
        &self.predicate
    }

    pub fn has_task(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), TaskbookError> {
        if self.has_task(&task) {
            return Err(TaskbookError::duplicate_task());
        }
        info!(task = %task.name(), "adding task");
        self.tasks.push(task);
        self.predicate = TaskPredicate::ShowAll;
        Ok(())
    }

    pub fn delete_task(&mut self, target: &Task) -> Result<(), TaskbookError> {
        let pos = self.position(target)?;
        let removed = self.tasks.remove(pos);
        info!(task = %removed.name(), "deleted task");
        Ok(())
    }

    /// Swaps `target` for `edited` at the same position.
    pub fn replace_task(&mut self, target: &Task, edited: Task) -> Result<(), TaskbookError> {
        let pos = self.position(target)?;
        info!(from = %target.name(), to = %edited.name(), "replacing task");
        self.tasks[pos] = edited;
        Ok(())
    }

    /// Installs `predicate` and returns how many tasks it lets through.
    pub fn update_filtered_task_list(&mut self, predicate: TaskPredicate) -> usize {
        self.predicate = predicate;
        let visible = self.tasks.iter().filter(|t| predicate.test(t)).count();
        debug!(filter = %predicate.describe(), visible, "filter applied");
        visible
    }

    /// The visible tasks, in insertion order.
    pub fn filtered_task_list(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.predicate.test(t)).collect()
    }

    /// Open tasks first, done tasks after; order within each group is kept.
    pub fn sort_tasks_by_status(&mut self) {
        self.tasks.sort_by(compare_by_status);
    }

    fn position(&self, target: &Task) -> Result<usize, TaskbookError> {
        self.tasks
            .iter()
            .position(|t| t == target)
            .ok_or_else(|| TaskbookError::task_not_found(target.name().as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::models::task::fixtures::{backend_task, frontend_task};
    use crate::models::{TaskCategory, TaskCategoryType};

    #[test]
    fn filter_keeps_insertion_order() {
        let later_backend = crate::logic::EditTaskDescriptor::new()
            .with_priority(crate::models::Priority::Low)
            .apply_to(&backend_task());
        let mut model =
            TaskModel::new(vec![backend_task(), frontend_task(), later_backend.clone()]).unwrap();
        let n = model.update_filtered_task_list(TaskPredicate::Category(TaskCategory::new(
            2,
            TaskCategoryType::Backend,
        )));
        assert_eq!(n, 2);
        let visible = model.filtered_task_list();
        assert_eq!(visible, vec![&backend_task(), &later_backend]);
    }

    #[test]
    fn new_rejects_equal_tasks() {
        let err = TaskModel::new(vec![backend_task(), frontend_task(), backend_task()]).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateTask);
        assert!(TaskModel::new(Vec::new()).unwrap().tasks().is_empty());
    }

    #[test]
    fn add_rejects_duplicates_and_resets_filter() {
        let mut model = TaskModel::new(vec![backend_task()]).unwrap();
        model.update_filtered_task_list(TaskPredicate::Category(TaskCategory::new(
            9,
            TaskCategoryType::Others,
        )));
        assert!(model.filtered_task_list().is_empty());

        let err = model.add_task(backend_task()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateTask);

        model.add_task(frontend_task()).unwrap();
        assert_eq!(model.filtered_task_list().len(), 2);
    }

    #[test]
    fn replace_keeps_position() {
        let mut model = TaskModel::new(vec![backend_task(), frontend_task()]).unwrap();
        let done_backend = crate::logic::EditTaskDescriptor::new()
            .with_done(true)
            .apply_to(&backend_task());
        model.replace_task(&backend_task(), done_backend.clone()).unwrap();
        assert_eq!(model.tasks()[0], done_backend);
        assert_eq!(model.tasks()[1], frontend_task());
    }

    #[test]
    fn replace_or_delete_missing_task_fails() {
        let mut model = TaskModel::new(vec![frontend_task()]).unwrap();
        let err = model.replace_task(&backend_task(), backend_task()).unwrap_err();
        assert_eq!(err.code, ErrorCode::TaskNotFound);
        assert!(model.delete_task(&backend_task()).is_err());
        model.delete_task(&frontend_task()).unwrap();
        assert!(model.tasks().is_empty());
    }

    #[test]
    fn sort_by_status_is_stable() {
        let mut model = TaskModel::new(vec![frontend_task(), backend_task()]).unwrap();
        model.sort_tasks_by_status();
        assert_eq!(model.tasks()[0], backend_task());
        assert_eq!(model.tasks()[1], frontend_task());
    }
}
