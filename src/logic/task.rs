use tracing::info;

use crate::error::{ErrorCode, TaskbookError};
use crate::model::TaskModel;
use crate::models::{Task, TaskPredicate};

use super::{task_at, Command, CommandResult, EditTaskCommand, EditTaskDescriptor, TaskIndex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskCommand {
    task: Task,
}

impl AddTaskCommand {
    pub fn new(task: Task) -> Self {
        Self { task }
    }
}

impl Command for AddTaskCommand {
    fn execute(&self, model: &mut TaskModel) -> Result<CommandResult, TaskbookError> {
        model.add_task(self.task.clone())?;
        Ok(CommandResult::with_task(
            format!("New task added: {}", self.task.name()),
            self.task.clone(),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTaskCommand {
    index: TaskIndex,
}

impl DeleteTaskCommand {
    pub fn new(index: TaskIndex) -> Self {
        Self { index }
    }
}

impl Command for DeleteTaskCommand {
    fn execute(&self, model: &mut TaskModel) -> Result<CommandResult, TaskbookError> {
        let target = task_at(model, self.index)?;
        model.delete_task(&target)?;
        Ok(CommandResult::with_task(
            format!("Deleted Task: {}", target.name()),
            target,
        ))
    }
}

/// Clears any filter, optionally putting open tasks ahead of done ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListTasksCommand {
    sort_by_status: bool,
}

impl ListTasksCommand {
    pub fn new(sort_by_status: bool) -> Self {
        Self { sort_by_status }
    }
}

impl Command for ListTasksCommand {
    fn execute(&self, model: &mut TaskModel) -> Result<CommandResult, TaskbookError> {
        if self.sort_by_status {
            model.sort_tasks_by_status();
        }
        let count = model.update_filtered_task_list(TaskPredicate::ShowAll);
        Ok(CommandResult::listed(count))
    }

    fn mutates(&self) -> bool {
        self.sort_by_status
    }
}

/// Sets or clears the done flag of the task at an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkTaskCommand {
    index: TaskIndex,
    done: bool,
}

impl MarkTaskCommand {
    pub fn mark(index: TaskIndex) -> Self {
        Self { index, done: true }
    }

    pub fn unmark(index: TaskIndex) -> Self {
        Self { index, done: false }
    }
}

impl Command for MarkTaskCommand {
    fn execute(&self, model: &mut TaskModel) -> Result<CommandResult, TaskbookError> {
        let target = task_at(model, self.index)?;
        if target.is_done() == self.done {
            return Err(TaskbookError::new(
                ErrorCode::UnchangedTask,
                format!("Task is already marked as {}: {}", target.status_str(), target.name()),
            ));
        }

        let edit = EditTaskCommand::new(self.index, EditTaskDescriptor::new().with_done(self.done))?;
        let result = edit.execute(model)?;
        info!(done = self.done, "task status changed");

        let verb = if self.done { "Marked" } else { "Unmarked" };
        let task = result.task.unwrap_or(target);
        Ok(CommandResult::with_task(format!("{verb} Task: {}", task.name()), task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::fixtures::{backend_task, frontend_task};

    fn idx(i: usize) -> TaskIndex {
        TaskIndex::from_one_based(i).unwrap()
    }

    #[test]
    fn add_then_delete() {
        let mut model = TaskModel::default();
        let result = AddTaskCommand::new(backend_task()).execute(&mut model).unwrap();
        assert_eq!(result.task, Some(backend_task()));
        assert_eq!(model.tasks().len(), 1);

        let err = AddTaskCommand::new(backend_task()).execute(&mut model).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateTask);

        DeleteTaskCommand::new(idx(1)).execute(&mut model).unwrap();
        assert!(model.tasks().is_empty());
        let err = DeleteTaskCommand::new(idx(1)).execute(&mut model).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidIndex);
    }

    #[test]
    fn delete_uses_filtered_index() {
        let mut model = TaskModel::new(vec![backend_task(), frontend_task()]).unwrap();
        model.update_filtered_task_list(TaskPredicate::Category(*frontend_task().category()));
        DeleteTaskCommand::new(idx(1)).execute(&mut model).unwrap();
        assert_eq!(model.tasks(), &[backend_task()]);
    }

    #[test]
    fn list_clears_filter_and_sorts() {
        let mut model = TaskModel::new(vec![frontend_task(), backend_task()]).unwrap();
        model.update_filtered_task_list(TaskPredicate::Category(*backend_task().category()));

        let result = ListTasksCommand::new(true).execute(&mut model).unwrap();
        assert_eq!(result.tasks_listed, Some(2));
        assert_eq!(model.tasks()[0], backend_task());
        assert!(ListTasksCommand::new(true).mutates());
        assert!(!ListTasksCommand::default().mutates());
    }

    #[test]
    fn mark_and_unmark() {
        let mut model = TaskModel::new(vec![backend_task()]).unwrap();
        let result = MarkTaskCommand::mark(idx(1)).execute(&mut model).unwrap();
        assert!(result.task.unwrap().is_done());
        assert!(model.tasks()[0].is_done());

        let err = MarkTaskCommand::mark(idx(1)).execute(&mut model).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnchangedTask);

        MarkTaskCommand::unmark(idx(1)).execute(&mut model).unwrap();
        assert_eq!(model.tasks()[0], backend_task());
    }
}
