use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ValidationError,
    EmptyEdit,
    EmptyFilter,
    InvalidIndex,
    TaskNotFound,
    DuplicateTask,
    UnchangedTask,
    StorageError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::EmptyEdit => "EMPTY_EDIT",
            Self::EmptyFilter => "EMPTY_FILTER",
            Self::InvalidIndex => "INVALID_INDEX",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::DuplicateTask => "DUPLICATE_TASK",
            Self::UnchangedTask => "UNCHANGED_TASK",
            Self::StorageError => "STORAGE_ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TaskbookError {
    pub code: ErrorCode,
    pub message: String,
}

impl TaskbookError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn empty_edit() -> Self {
        Self::new(
            ErrorCode::EmptyEdit,
            "At least one field to edit must be provided.",
        )
    }

    pub fn empty_filter() -> Self {
        Self::new(
            ErrorCode::EmptyFilter,
            "At least one parameter to filter with must be provided.",
        )
    }

    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::new(
            ErrorCode::InvalidIndex,
            format!("The task index provided is invalid: {index} (list has {len} tasks)"),
        )
    }

    pub fn task_not_found(name: &str) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task not found in the task list: {name}"),
        )
    }

    pub fn duplicate_task() -> Self {
        Self::new(
            ErrorCode::DuplicateTask,
            "This task already exists in the task list.",
        )
    }

    pub fn unchanged_task() -> Self {
        Self::new(
            ErrorCode::UnchangedTask,
            "The edited task is identical to the original.",
        )
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }
}

impl From<std::io::Error> for TaskbookError {
    fn from(e: std::io::Error) -> Self {
        Self::storage(e.to_string())
    }
}

impl From<serde_json::Error> for TaskbookError {
    fn from(e: serde_json::Error) -> Self {
        Self::storage(e.to_string())
    }
}
