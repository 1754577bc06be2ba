//! ReflectionWizard - the linear question flow ending in a path choice.
//!
//! Steps `0..N` are the prompts of a [`PromptSet`]; step `N` is the
//! accept/fight choice. Every operation either applies fully or returns a
//! [`WizardError`] and leaves the wizard exactly as it was.

use serde::{Deserialize, Serialize};

use super::{
    CancelOutcome, CompletedSession, DraftSnapshot, PromptSet, ReflectionPath, ValidationPolicy,
    WizardError, WizardProgress, WizardStatus, WizardStep,
};
use crate::domain::foundation::{ReflectionId, StateMachine, Timestamp, ValidationError};

/// Deserialization goes through [`WizardRecord`] so a stored wizard can
/// never break the answers/prompts alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WizardRecord")]
pub struct ReflectionWizard {
    id: ReflectionId,
    prompts: PromptSet,
    answers: Vec<String>,
    current_step: usize,
    path: ReflectionPath,
    policy: ValidationPolicy,
    status: WizardStatus,
    opened_at: Option<Timestamp>,
}

impl ReflectionWizard {
    /// Creates a closed wizard over `prompts`.
    pub fn new(prompts: PromptSet, policy: ValidationPolicy) -> Self {
        let answers = vec![String::new(); prompts.len()];
        Self {
            id: ReflectionId::new(),
            prompts,
            answers,
            current_step: 0,
            path: ReflectionPath::default(),
            policy,
            status: WizardStatus::Closed,
            opened_at: None,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Lifecycle
    // ───────────────────────────────────────────────────────────────

    /// Resets to step 0 with empty answers and `Accept`, then shows the wizard.
    ///
    /// Opening an already open wizard starts over with a new id.
    pub fn open(&mut self) -> ReflectionId {
        self.reset();
        self.id = ReflectionId::new();
        self.opened_at = Some(Timestamp::now());
        self.status = WizardStatus::Open;
        self.id
    }

    /// Hands out the finished record and closes the wizard.
    pub fn complete(&mut self) -> Result<CompletedSession, WizardError> {
        self.ensure_open()?;
        if !self.is_at_path_step() {
            return Err(WizardError::NotFinished {
                current: self.current_step,
                final_step: self.question_count(),
            });
        }

        let session = CompletedSession {
            path: self.path,
            answers: self.answers.clone(),
            questions: self.prompts.to_vec(),
        };
        self.close();
        Ok(session)
    }

    /// Closes the wizard, asking for a draft when any answer has content.
    pub fn cancel(&mut self) -> Result<CancelOutcome, WizardError> {
        self.ensure_open()?;

        let outcome = if self.has_content() {
            CancelOutcome::DraftRequested(DraftSnapshot {
                path: self.path,
                answers: self.answers.clone(),
                questions: self.prompts.to_vec(),
                current_step: self.current_step,
            })
        } else {
            CancelOutcome::Discarded
        };
        self.close();
        Ok(outcome)
    }

    // ───────────────────────────────────────────────────────────────
    // Editing
    // ───────────────────────────────────────────────────────────────

    /// Replaces the answer at `step`.
    ///
    /// Strict wizards only accept edits to the active step.
    pub fn set_answer(&mut self, step: usize, text: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_open()?;
        let question_count = self.question_count();
        if step >= question_count {
            return Err(WizardError::StepOutOfRange {
                step,
                question_count,
            });
        }
        if self.policy.is_strict() && step != self.current_step {
            return Err(WizardError::StepNotActive {
                step,
                current: self.current_step,
            });
        }

        self.answers[step] = text.into();
        Ok(())
    }

    pub fn set_path(&mut self, path: ReflectionPath) -> Result<(), WizardError> {
        self.ensure_open()?;
        if !self.is_at_path_step() {
            return Err(WizardError::NotAtPathStep {
                current: self.current_step,
            });
        }
        self.path = path;
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Moves one step forward and returns the new step.
    pub fn advance(&mut self) -> Result<usize, WizardError> {
        self.ensure_open()?;
        if self.is_at_path_step() {
            return Err(WizardError::AtLastStep);
        }
        if self.policy.is_strict() && self.answers[self.current_step].trim().is_empty() {
            return Err(WizardError::AnswerRequired {
                step: self.current_step,
            });
        }

        self.current_step += 1;
        Ok(self.current_step)
    }

    /// Moves one step back and returns the new step.
    pub fn retreat(&mut self) -> Result<usize, WizardError> {
        self.ensure_open()?;
        if self.current_step == 0 {
            return Err(WizardError::AtFirstStep);
        }

        self.current_step -= 1;
        Ok(self.current_step)
    }

    // ───────────────────────────────────────────────────────────────
    // Control state
    // ───────────────────────────────────────────────────────────────

    pub fn can_advance(&self) -> bool {
        self.is_open()
            && !self.is_at_path_step()
            && (!self.policy.is_strict() || !self.answers[self.current_step].trim().is_empty())
    }

    pub fn can_retreat(&self) -> bool {
        self.is_open() && self.current_step > 0
    }

    pub fn can_set_path(&self) -> bool {
        self.is_open() && self.is_at_path_step()
    }

    pub fn can_complete(&self) -> bool {
        self.can_set_path()
    }

    /// True when at least one answer is non-empty after trimming.
    pub fn has_content(&self) -> bool {
        self.answers.iter().any(|a| !a.trim().is_empty())
    }

    /// Content of the active step.
    pub fn current(&self) -> WizardStep<'_> {
        match self.prompts.get(self.current_step) {
            Some(prompt) => WizardStep::Question {
                index: self.current_step,
                prompt,
                answer: &self.answers[self.current_step],
            },
            None => WizardStep::PathSelection { path: self.path },
        }
    }

    pub fn progress(&self) -> WizardProgress {
        WizardProgress::new(self.current_step, self.question_count())
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> ReflectionId {
        self.id
    }

    pub fn prompts(&self) -> &PromptSet {
        &self.prompts
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn path(&self) -> ReflectionPath {
        self.path
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn status(&self) -> WizardStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// N, the number of prompts. The path step is at index N.
    pub fn question_count(&self) -> usize {
        self.prompts.len()
    }

    pub fn opened_at(&self) -> Option<Timestamp> {
        self.opened_at
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn is_at_path_step(&self) -> bool {
        self.current_step == self.question_count()
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(WizardError::NotOpen)
        }
    }

    fn close(&mut self) {
        self.status = self
            .status
            .transition_to(WizardStatus::Closed)
            .unwrap_or(WizardStatus::Closed);
        self.reset();
        self.opened_at = None;
    }

    fn reset(&mut self) {
        self.answers = vec![String::new(); self.prompts.len()];
        self.current_step = 0;
        self.path = ReflectionPath::default();
    }
}

/// Unchecked wire form of a [`ReflectionWizard`].
#[derive(Deserialize)]
struct WizardRecord {
    id: ReflectionId,
    prompts: PromptSet,
    answers: Vec<String>,
    current_step: usize,
    path: ReflectionPath,
    policy: ValidationPolicy,
    status: WizardStatus,
    opened_at: Option<Timestamp>,
}

impl TryFrom<WizardRecord> for ReflectionWizard {
    type Error = ValidationError;

    fn try_from(record: WizardRecord) -> Result<Self, Self::Error> {
        let question_count = record.prompts.len();
        if record.answers.len() != question_count {
            return Err(ValidationError::out_of_range(
                "answers",
                question_count as i32,
                question_count as i32,
                record.answers.len() as i32,
            ));
        }
        if record.current_step > question_count {
            return Err(ValidationError::out_of_range(
                "current_step",
                0,
                question_count as i32,
                record.current_step as i32,
            ));
        }
        Ok(Self {
            id: record.id,
            prompts: record.prompts,
            answers: record.answers,
            current_step: record.current_step,
            path: record.path,
            policy: record.policy,
            status: record.status,
            opened_at: record.opened_at,
        })
    }
}
