//! Validation policy for the reflection wizard.

use serde::{Deserialize, Serialize};

/// Selects the strict or lenient wizard variant.
///
/// Strict: only the active step's answer is editable, and "Next" requires
/// that answer to be non-empty after trimming. Lenient: any question's
/// answer may be edited and empty answers may be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    pub require_answer_to_advance: bool,
}

impl ValidationPolicy {
    pub const fn strict() -> Self {
        Self {
            require_answer_to_advance: true,
        }
    }

    pub const fn lenient() -> Self {
        Self {
            require_answer_to_advance: false,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.require_answer_to_advance
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::strict()
    }
}
