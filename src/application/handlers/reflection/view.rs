//! ReflectionView - owned read model of a wizard, returned by every
//! reflection handler that leaves the wizard open.

use serde::Serialize;

use crate::domain::foundation::{Percentage, ReflectionId};
use crate::domain::reflection::{ReflectionPath, ReflectionWizard, WizardStep};

/// What the active step shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepView {
    Question {
        index: usize,
        prompt: String,
        answer: String,
    },
    PathSelection {
        path: ReflectionPath,
        options: Vec<ReflectionPath>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReflectionView {
    pub reflection_id: ReflectionId,
    pub current_step: usize,
    pub question_count: usize,
    pub step: StepView,
    pub answers: Vec<String>,
    pub path: ReflectionPath,
    pub strict: bool,
    pub progress_label: String,
    pub progress_fraction: f64,
    pub progress_percent: Percentage,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub can_complete: bool,
}

impl ReflectionView {
    pub fn from_wizard(wizard: &ReflectionWizard) -> Self {
        let step = match wizard.current() {
            WizardStep::Question {
                index,
                prompt,
                answer,
            } => StepView::Question {
                index,
                prompt: prompt.to_string(),
                answer: answer.to_string(),
            },
            WizardStep::PathSelection { path } => StepView::PathSelection {
                path,
                options: ReflectionPath::ALL.to_vec(),
            },
        };
        let progress = wizard.progress();

        Self {
            reflection_id: wizard.id(),
            current_step: wizard.current_step(),
            question_count: wizard.question_count(),
            step,
            answers: wizard.answers().to_vec(),
            path: wizard.path(),
            strict: wizard.policy().is_strict(),
            progress_label: progress.label(),
            progress_fraction: progress.fraction(),
            progress_percent: progress.percent(),
            can_advance: wizard.can_advance(),
            can_retreat: wizard.can_retreat(),
            can_complete: wizard.can_complete(),
        }
    }
}
