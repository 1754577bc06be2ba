//! What the wizard shows at its current step, and how far along it is.

use serde::Serialize;

use super::ReflectionPath;
use crate::domain::foundation::Percentage;

/// Content of the active step, a pure function of `current_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep<'a> {
    /// `current_step < N`: a prompt with its free-text answer.
    Question {
        index: usize,
        prompt: &'a str,
        answer: &'a str,
    },
    /// `current_step == N`: the accept/fight choice.
    PathSelection { path: ReflectionPath },
}

impl WizardStep<'_> {
    pub fn is_path_selection(&self) -> bool {
        matches!(self, WizardStep::PathSelection { .. })
    }
}

/// Progress through the wizard.
///
/// `fraction = (current_step + 1) / (N + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WizardProgress {
    /// 1-based position of the active step.
    pub step_number: usize,
    /// Number of steps including path selection (N + 1).
    pub total_steps: usize,
}

impl WizardProgress {
    pub fn new(current_step: usize, question_count: usize) -> Self {
        Self {
            step_number: current_step + 1,
            total_steps: question_count + 1,
        }
    }

    pub fn fraction(&self) -> f64 {
        self.step_number as f64 / self.total_steps as f64
    }

    pub fn percent(&self) -> Percentage {
        Percentage::from_ratio(self.step_number, self.total_steps)
    }

    /// "Step k / T"
    pub fn label(&self) -> String {
        format!("Step {} / {}", self.step_number, self.total_steps)
    }
}
