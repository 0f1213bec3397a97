use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TaskbookError;

/// Name of a task. Never blank; surrounding whitespace is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskName(String);

impl TaskName {
    pub const CONSTRAINTS: &'static str = "Task names should not be blank";

    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskbookError> {
        non_blank(value.as_ref(), Self::CONSTRAINTS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-text description of a task. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    pub const CONSTRAINTS: &'static str = "Task descriptions should not be blank";

    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskbookError> {
        non_blank(value.as_ref(), Self::CONSTRAINTS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn non_blank(value: &str, constraint: &str) -> Result<String, TaskbookError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TaskbookError::validation(constraint));
    }
    Ok(trimmed.to_string())
}

macro_rules! string_wrapper_impls {
    ($ty:ident) => {
        impl TryFrom<String> for $ty {
            type Error = TaskbookError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_wrapper_impls!(TaskName);
string_wrapper_impls!(Description);
