use crate::error::InspectError;
use serde::Serialize;
use std::fmt;

/// A problem found while checking a type catalog before inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub location: String,
    pub kind: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.location, self.message)
    }
}

pub fn print_issues(issues: &[ValidationIssue]) {
    tracing::error!(count = issues.len(), "type catalog validation failed");
    for issue in issues {
        tracing::error!(kind = %issue.kind, location = %issue.location, "{}", issue.message);
    }
}

/// Turn a non-empty issue list into [`InspectError::InvalidCatalog`].
pub fn fail_if_issues(issues: Vec<ValidationIssue>) -> Result<(), InspectError> {
    if issues.is_empty() {
        return Ok(());
    }
    print_issues(&issues);
    Err(InspectError::InvalidCatalog {
        count: issues.len(),
        issues,
    })
}
