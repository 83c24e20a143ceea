//! Priority tag shared by client tasks and server todo rows.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AppError;

/// Urgency tag attached to a task.
///
/// Serialized with capitalized variant names (`"High"`, `"Medium"`,
/// `"Low"`), matching what the page stores in local storage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Needs attention first.
    High,
    /// The preselected priority for new tasks.
    #[default]
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Canonical string form, also used as the `SQLite` column value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(AppError::Validation(format!("invalid priority: {other}"))),
        }
    }
}
