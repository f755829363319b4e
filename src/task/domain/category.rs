//! Category labels for task records.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of category labels a task can carry.
///
/// The query side expresses the "ALL" wildcard as the absence of a category
/// filter; "ALL" is never a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Work-related tasks.
    Work,
    /// Study-related tasks.
    Study,
    /// Everything else.
    Etc,
}

impl Category {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Study => "STUDY",
            Self::Etc => "ETC",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "WORK" => Ok(Self::Work),
            "STUDY" => Ok(Self::Study),
            "ETC" => Ok(Self::Etc),
            _ => Err(TaskDomainError::UnknownCategory(value.to_owned())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
