//! The fixed mood taxonomy.
//!
//! Moods are persisted as their integer value. The entry store does not check
//! values against this table; input validation happens at the edges.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// One of the twelve moods a day can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Disappointed,
    Content,
    Sad,
    Tired,
    Normal,
    Hurt,
    Anxious,
    Angry,
    Sleepy,
    Confident,
    Numb,
}

impl Mood {
    /// Every mood, ordered by stored value.
    pub const ALL: [Mood; 12] = [
        Mood::Happy,
        Mood::Disappointed,
        Mood::Content,
        Mood::Sad,
        Mood::Tired,
        Mood::Normal,
        Mood::Hurt,
        Mood::Anxious,
        Mood::Angry,
        Mood::Sleepy,
        Mood::Confident,
        Mood::Numb,
    ];

    /// The integer stored in the `mood` column.
    pub fn value(self) -> i64 {
        match self {
            Mood::Happy => 1,
            Mood::Disappointed => 2,
            Mood::Content => 3,
            Mood::Sad => 4,
            Mood::Tired => 5,
            Mood::Normal => 6,
            Mood::Hurt => 7,
            Mood::Anxious => 8,
            Mood::Angry => 9,
            Mood::Sleepy => 10,
            Mood::Confident => 11,
            Mood::Numb => 12,
        }
    }

    pub fn from_value(value: i64) -> Option<Self> {
        Mood::ALL.into_iter().find(|m| m.value() == value)
    }

    /// Display lookup: unknown values show as `Normal`.
    pub fn lookup(value: i64) -> Self {
        Mood::from_value(value).unwrap_or(Mood::Normal)
    }

    /// Validates user input against the taxonomy.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidMood` for values outside 1-12.
    pub fn parse_value(value: i64) -> AppResult<Self> {
        Mood::from_value(value).ok_or(AppError::InvalidMood(value))
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Disappointed => "Disappointed",
            Mood::Content => "Content",
            Mood::Sad => "Sad",
            Mood::Tired => "Tired",
            Mood::Normal => "Normal",
            Mood::Hurt => "Hurt",
            Mood::Anxious => "Anxious",
            Mood::Angry => "Angry",
            Mood::Sleepy => "Sleepy",
            Mood::Confident => "Confident",
            Mood::Numb => "Numb",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Disappointed => "😔",
            Mood::Content => "😌",
            Mood::Sad => "😢",
            Mood::Tired => "😴",
            Mood::Normal => "😐",
            Mood::Hurt => "😟",
            Mood::Anxious => "😰",
            Mood::Angry => "😠",
            Mood::Sleepy => "🥱",
            Mood::Confident => "😎",
            Mood::Numb => "😑",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}
