use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TaskbookError;

/// The calendar date a task is due on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDeadline(NaiveDate);

impl TaskDeadline {
    pub const FORMAT: &'static str = "%Y-%m-%d";
    pub const CONSTRAINTS: &'static str = "Deadlines should be valid dates in the format YYYY-MM-DD";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn parse(s: &str) -> Result<Self, TaskbookError> {
        NaiveDate::parse_from_str(s.trim(), Self::FORMAT)
            .map(Self)
            .map_err(|_| TaskbookError::validation(Self::CONSTRAINTS))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn is_before(&self, other: &TaskDeadline) -> bool {
        self.0 < other.0
    }

    pub fn is_after(&self, other: &TaskDeadline) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for TaskDeadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}
