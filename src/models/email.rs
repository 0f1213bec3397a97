use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::TaskbookError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]+(-[A-Za-z0-9]+)*$",
    )
    .expect("email pattern is valid")
});

/// Email address of a contact in the address book.
///
/// Tasks only carry it as an opaque link to a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain. \
         The local part may contain alphanumerics and + _ . - but may not start or end with \
         a special character. The domain is made of labels separated by periods; the last \
         label must be at least 2 characters long.";

    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskbookError> {
        let value = value.as_ref().trim();
        if !Self::is_valid(value) {
            return Err(TaskbookError::validation(Self::CONSTRAINTS));
        }
        Ok(Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        let last_label_ok = value
            .rsplit(['.', '@'])
            .next()
            .is_some_and(|label| label.len() >= 2);
        last_label_ok && EMAIL_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = TaskbookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
