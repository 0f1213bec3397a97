use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TaskbookError;

/// The area of work a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategoryType {
    Database,
    Frontend,
    Backend,
    #[serde(alias = "ui-ux")]
    Uiux,
    Presentation,
    Others,
}

impl TaskCategoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Uiux => "uiux",
            Self::Presentation => "presentation",
            Self::Others => "others",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "database" => Some(Self::Database),
            "frontend" => Some(Self::Frontend),
            "backend" => Some(Self::Backend),
            "uiux" | "ui-ux" => Some(Self::Uiux),
            "presentation" => Some(Self::Presentation),
            "others" => Some(Self::Others),
            _ => None,
        }
    }
}

/// A category type together with a caller-defined level.
///
/// Two categories are equal only when both the level and the type match.
/// The hash covers both fields as well, so categories behave as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskCategory {
    pub level: i32,
    #[serde(rename = "type")]
    pub kind: TaskCategoryType,
}

impl TaskCategory {
    pub const CONSTRAINTS: &'static str = "Category should be [LEVEL:]TYPE where TYPE is one of: \
         database, frontend, backend, uiux, presentation, others";

    pub fn new(level: i32, kind: TaskCategoryType) -> Self {
        Self { level, kind }
    }

    /// Parses `TYPE` or `LEVEL:TYPE`. The level defaults to 0.
    pub fn parse(s: &str) -> Result<Self, TaskbookError> {
        let invalid = || TaskbookError::validation(Self::CONSTRAINTS);
        let (level, kind) = match s.split_once(':') {
            Some((level, kind)) => (level.trim().parse::<i32>().map_err(|_| invalid())?, kind),
            None => (0, s),
        };
        let kind = TaskCategoryType::from_str(kind).ok_or_else(invalid)?;
        Ok(Self::new(level, kind))
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.level, self.kind.as_str().to_ascii_uppercase())
    }
}
