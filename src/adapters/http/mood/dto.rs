//! Request and response bodies for mood endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::mood::{Feeling, MoodCheckIn};

#[derive(Debug, Clone, Deserialize)]
pub struct SetMoodRequest {
    pub feeling: String,
}

/// One entry of the mood picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeelingResponse {
    pub feeling: Feeling,
    pub score: u8,
    pub icon: String,
}

impl From<Feeling> for FeelingResponse {
    fn from(feeling: Feeling) -> Self {
        Self {
            feeling,
            score: feeling.score(),
            icon: feeling.icon().to_string(),
        }
    }
}

/// Current mood with one encouragement line picked for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodResponse {
    pub feeling: Option<FeelingResponse>,
    pub line: Option<String>,
    pub updated_at: Option<Timestamp>,
}

impl From<&MoodCheckIn> for MoodResponse {
    fn from(check_in: &MoodCheckIn) -> Self {
        let updated_at = check_in.updated_at();
        // Rotate the line with the check-in time so it stays stable per check-in
        let seed = updated_at
            .map(|t| t.as_datetime().timestamp() as u64)
            .unwrap_or_default();
        Self {
            feeling: check_in.feeling().map(FeelingResponse::from),
            line: check_in.feeling().map(|f| f.line_for(seed).to_string()),
            updated_at,
        }
    }
}
