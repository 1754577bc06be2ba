//! WizardStatus - whether the reflection wizard is showing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Visibility lifecycle of the wizard.
///
/// `Open -> Open` is legal: re-opening an open wizard resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStatus {
    #[default]
    Closed,
    Open,
}

impl WizardStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, WizardStatus::Open)
    }
}

impl StateMachine for WizardStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStatus::*;
        matches!((self, target), (Closed, Open) | (Open, Open) | (Open, Closed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            WizardStatus::Closed => vec![WizardStatus::Open],
            WizardStatus::Open => vec![WizardStatus::Open, WizardStatus::Closed],
        }
    }
}

impl fmt::Display for WizardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStatus::Closed => "closed",
            WizardStatus::Open => "open",
        };
        write!(f, "{}", s)
    }
}
