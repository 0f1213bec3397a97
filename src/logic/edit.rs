use tracing::info;

use crate::error::TaskbookError;
use crate::model::TaskModel;
use crate::models::{Description, Email, Priority, Task, TaskCategory, TaskDeadline, TaskName, TaskPredicate};

use super::{task_at, Command, CommandResult, TaskIndex};

/// The fields to change on a task. Unset fields are left as they are.
///
/// Every `with_*` call consumes the descriptor and returns the updated one,
/// so clone it first to reuse a partially built descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskDescriptor {
    name: Option<TaskName>,
    category: Option<TaskCategory>,
    description: Option<Description>,
    priority: Option<Priority>,
    deadline: Option<TaskDeadline>,
    /// `Some(None)` unlinks the contact.
    email: Option<Option<Email>>,
    done: Option<bool>,
}

impl EditTaskDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A descriptor that sets every field to the value in `task`.
    pub fn from_task(task: &Task) -> Self {
        Self {
            name: Some(task.name().clone()),
            category: Some(*task.category()),
            description: Some(task.description().clone()),
            priority: Some(task.priority()),
            deadline: Some(*task.deadline()),
            email: Some(task.email().cloned()),
            done: Some(task.is_done()),
        }
    }

    pub fn with_name(mut self, name: TaskName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_deadline(mut self, deadline: TaskDeadline) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_email(mut self, email: Option<Email>) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    pub fn name(&self) -> Option<&TaskName> {
        self.name.as_ref()
    }

    pub fn category(&self) -> Option<&TaskCategory> {
        self.category.as_ref()
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn deadline(&self) -> Option<&TaskDeadline> {
        self.deadline.as_ref()
    }

    pub fn email(&self) -> Option<Option<&Email>> {
        self.email.as_ref().map(Option::as_ref)
    }

    pub fn done(&self) -> Option<bool> {
        self.done
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.category.is_some()
            || self.description.is_some()
            || self.priority.is_some()
            || self.deadline.is_some()
            || self.email.is_some()
            || self.done.is_some()
    }

    /// Builds the edited copy of `task`. Neither input is modified.
    pub fn apply_to(&self, task: &Task) -> Task {
        Task::new(
            self.name.clone().unwrap_or_else(|| task.name().clone()),
            self.category.unwrap_or(*task.category()),
            self.description
                .clone()
                .unwrap_or_else(|| task.description().clone()),
            self.priority.unwrap_or(task.priority()),
            self.deadline.unwrap_or(*task.deadline()),
            self.email.clone().unwrap_or_else(|| task.email().cloned()),
            self.done.unwrap_or(task.is_done()),
        )
    }
}

/// Replaces the task at an index with an edited copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskCommand {
    index: TaskIndex,
    descriptor: EditTaskDescriptor,
}

impl EditTaskCommand {
    pub fn new(index: TaskIndex, descriptor: EditTaskDescriptor) -> Result<Self, TaskbookError> {
        if !descriptor.is_any_field_edited() {
            return Err(TaskbookError::empty_edit());
        }
        Ok(Self { index, descriptor })
    }

    pub fn index(&self) -> TaskIndex {
        self.index
    }

    pub fn descriptor(&self) -> &EditTaskDescriptor {
        &self.descriptor
    }
}

impl Command for EditTaskCommand {
    fn execute(&self, model: &mut TaskModel) -> Result<CommandResult, TaskbookError> {
        let target = task_at(model, self.index)?;
        let edited = self.descriptor.apply_to(&target);

        if edited == target {
            return Err(TaskbookError::unchanged_task());
        }
        if model.has_task(&edited) {
            return Err(TaskbookError::duplicate_task());
        }

        model.replace_task(&target, edited.clone())?;
        model.update_filtered_task_list(TaskPredicate::ShowAll);
        info!(index = self.index.one_based(), "task edited");
        Ok(CommandResult::with_task(
            format!("Edited Task: {}", edited.name()),
            edited,
        ))
    }
}
