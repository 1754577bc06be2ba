//! Feeling - the mood spectrum a user can check in with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Moods in spectrum order, brightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feeling {
    Happy,
    Calm,
    Worried,
    Stressed,
    Frustrated,
    Sad,
}

impl Feeling {
    /// Spectrum order.
    pub const SPECTRUM: [Feeling; 6] = [
        Feeling::Happy,
        Feeling::Calm,
        Feeling::Worried,
        Feeling::Stressed,
        Feeling::Frustrated,
        Feeling::Sad,
    ];

    /// 1 (Happy) through 6 (Sad).
    pub fn score(&self) -> u8 {
        match self {
            Feeling::Happy => 1,
            Feeling::Calm => 2,
            Feeling::Worried => 3,
            Feeling::Stressed => 4,
            Feeling::Frustrated => 5,
            Feeling::Sad => 6,
        }
    }

    /// Material Design icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            Feeling::Happy => "emoticon-happy-outline",
            Feeling::Calm => "emoticon-neutral-outline",
            Feeling::Worried => "emoticon-confused-outline",
            Feeling::Stressed => "emoticon-neutral",
            Feeling::Frustrated => "emoticon-angry-outline",
            Feeling::Sad => "emoticon-sad-outline",
        }
    }

    /// Encouragement lines shown next to the current mood.
    pub fn lines(&self) -> [&'static str; 3] {
        match self {
            Feeling::Happy => ["Feeling great!", "Keep it up!", "What made you happy?"],
            Feeling::Calm => ["Peaceful moment.", "Stay balanced.", "Enjoy the calmness."],
            Feeling::Worried => ["Something on your mind?", "It’s okay to pause.", "Breathe."],
            Feeling::Stressed => ["Feeling tense?", "Take it step by step.", "You got this."],
            Feeling::Frustrated => ["It’s tough right now.", "Let it out safely.", "Slow down."],
            Feeling::Sad => ["It’s okay to be sad.", "Be gentle with yourself.", "Rest."],
        }
    }

    /// Picks one of `lines()`; the same seed always gives the same line.
    pub fn line_for(&self, seed: u64) -> &'static str {
        let lines = self.lines();
        lines[(seed % lines.len() as u64) as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Feeling::Happy => "Happy",
            Feeling::Calm => "Calm",
            Feeling::Worried => "Worried",
            Feeling::Stressed => "Stressed",
            Feeling::Frustrated => "Frustrated",
            Feeling::Sad => "Sad",
        }
    }
}

impl fmt::Display for Feeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Feeling {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feeling::SPECTRUM
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("feeling", format!("unknown feeling '{}'", s))
            })
    }
}
