//! Form field value objects

use serde::{Deserialize, Serialize};

/// The fixed (non-list) inputs of the interview form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    JobRole,
    DifficultyLevel,
    ObjectiveQuestionCount,
    ProgrammingQuestionCount,
    SubmitterEmail,
}

impl FieldName {
    /// All fixed fields in display order
    pub const ALL: [FieldName; 5] = [
        FieldName::JobRole,
        FieldName::DifficultyLevel,
        FieldName::ObjectiveQuestionCount,
        FieldName::ProgrammingQuestionCount,
        FieldName::SubmitterEmail,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::JobRole => "Job Role",
            Self::DifficultyLevel => "Difficulty Level",
            Self::ObjectiveQuestionCount => "Objective Questions",
            Self::ProgrammingQuestionCount => "Programming Questions",
            Self::SubmitterEmail => "Your Email",
        }
    }

    /// Placeholder shown when the field is empty and not focused
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::JobRole => "e.g. Senior Backend Engineer",
            Self::DifficultyLevel => "select: easy / medium / hard",
            Self::ObjectiveQuestionCount => "e.g. 10",
            Self::ProgrammingQuestionCount => "e.g. 5",
            Self::SubmitterEmail => "you@company.com",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::JobRole | Self::SubmitterEmail => FieldKind::Text,
            Self::DifficultyLevel => FieldKind::Choice,
            Self::ObjectiveQuestionCount | Self::ProgrammingQuestionCount => FieldKind::Count,
        }
    }
}

/// How keystrokes are applied to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, any printable character
    Text,
    /// Non-negative integer typed as text, digits only
    Count,
    /// Enumerated choice, changed by cycling or shortcut keys
    Choice,
}

impl FieldKind {
    /// Whether a typed character may be appended to a field of this kind
    pub fn accepts_char(&self, c: char) -> bool {
        match self {
            FieldKind::Text => !c.is_control(),
            FieldKind::Count => c.is_ascii_digit(),
            FieldKind::Choice => false,
        }
    }
}

/// Interview difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Parse a level name, case-insensitive. Anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Map a single shortcut key (`1`-`3` or the initial letter) to a level
    pub fn from_shortcut(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            '1' | 'e' => Some(Self::Easy),
            '2' | 'm' => Some(Self::Medium),
            '3' | 'h' => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }
}
