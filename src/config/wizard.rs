//! Reflection wizard behaviour

use serde::Deserialize;

use crate::domain::reflection::ValidationPolicy;

#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// Refuse to advance past a question whose answer is blank
    #[serde(default = "default_true")]
    pub require_answer_to_advance: bool,

    /// Offer to keep a cancelled wizard with content as a draft
    #[serde(default = "default_true")]
    pub offer_drafts: bool,
}

impl WizardConfig {
    pub fn policy(&self) -> ValidationPolicy {
        if self.require_answer_to_advance {
            ValidationPolicy::strict()
        } else {
            ValidationPolicy::lenient()
        }
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            require_answer_to_advance: true,
            offer_drafts: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_with_drafts() {
        let config = WizardConfig::default();
        assert!(config.policy().is_strict());
        assert!(config.offer_drafts);
    }

    #[test]
    fn lenient_when_answers_not_required() {
        let config: WizardConfig =
            serde_json::from_str(r#"{"require_answer_to_advance": false}"#).unwrap();
        assert!(!config.policy().is_strict());
        assert!(config.offer_drafts);
    }
}
