//! ReflectionPath - the final accept-or-fight classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Outcome chosen at the last wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReflectionPath {
    /// Accept the situation as it is.
    #[default]
    Accept,
    /// Push back and change it.
    Fight,
}

impl ReflectionPath {
    /// Both paths, in the order they are offered.
    pub const ALL: [ReflectionPath; 2] = [ReflectionPath::Accept, ReflectionPath::Fight];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReflectionPath::Accept => "accept",
            ReflectionPath::Fight => "fight",
        }
    }

    /// Label shown on the choice button.
    pub fn label(&self) -> &'static str {
        match self {
            ReflectionPath::Accept => "Accept",
            ReflectionPath::Fight => "Fight",
        }
    }
}

impl fmt::Display for ReflectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReflectionPath {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accept" => Ok(ReflectionPath::Accept),
            "fight" => Ok(ReflectionPath::Fight),
            other => Err(ValidationError::invalid_format(
                "path",
                format!("expected 'accept' or 'fight', got '{}'", other),
            )),
        }
    }
}
