//! PromptSet - the fixed, ordered questions of a reflection.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// The standard seven prompts, walked in order from feeling to fact.
pub const STANDARD_PROMPTS: [&str; 7] = [
    "What you feel right now?",
    "What’s on your mind?",
    "What happened?",
    "What triggers this?",
    "What else could be going on?",
    "What you assume?",
    "What’s the fact?",
];

/// Maximum length of a single prompt.
pub const MAX_PROMPT_LENGTH: usize = 200;

/// Ordered, non-empty list of prompts.
///
/// # Invariants
///
/// - At least one prompt
/// - No prompt is blank or longer than `MAX_PROMPT_LENGTH`
/// - Never mutated after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PromptSet {
    prompts: Vec<String>,
}

impl PromptSet {
    /// Builds a prompt set, rejecting empty lists and blank prompts.
    pub fn new<I, S>(prompts: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompts: Vec<String> = prompts.into_iter().map(Into::into).collect();
        if prompts.is_empty() {
            return Err(ValidationError::empty_field("prompts"));
        }
        for (index, prompt) in prompts.iter().enumerate() {
            let trimmed = prompt.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::empty_field(format!("prompts[{}]", index)));
            }
            if trimmed.chars().count() > MAX_PROMPT_LENGTH {
                return Err(ValidationError::invalid_format(
                    format!("prompts[{}]", index),
                    format!("must be {} characters or less", MAX_PROMPT_LENGTH),
                ));
            }
        }
        Ok(Self { prompts })
    }

    /// The seven prompts used when no custom set is configured.
    pub fn standard() -> Self {
        Self {
            prompts: STANDARD_PROMPTS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Number of prompts (N).
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Prompt at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.prompts.get(index).map(String::as_str)
    }

    /// All prompts in order.
    pub fn as_slice(&self) -> &[String] {
        &self.prompts
    }

    /// Owned copy of the prompts.
    pub fn to_vec(&self) -> Vec<String> {
        self.prompts.clone()
    }
}

impl Default for PromptSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<String>> for PromptSet {
    type Error = ValidationError;

    fn try_from(prompts: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(prompts)
    }
}

impl From<PromptSet> for Vec<String> {
    fn from(set: PromptSet) -> Self {
        set.prompts
    }
}
