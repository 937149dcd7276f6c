//! Interview form state and focus navigation

use super::field::{Difficulty, FieldKind, FieldName};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// What currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldName),
    Recipient(usize),
    AddRecipient,
    Submit,
}

impl FocusTarget {
    /// Returns true for the action buttons row
    pub fn is_button(&self) -> bool {
        matches!(self, FocusTarget::AddRecipient | FocusTarget::Submit)
    }
}

/// All values collected by the interview form.
///
/// `recipient_emails` always holds at least one slot; blank slots are
/// placeholders the user has not filled in yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewForm {
    pub job_role: String,
    pub difficulty_level: Option<Difficulty>,
    pub objective_question_count: String,
    pub programming_question_count: String,
    pub submitter_email: String,
    pub recipient_emails: Vec<String>,
    pub focus: FocusTarget,
}

impl Default for InterviewForm {
    fn default() -> Self {
        Self {
            job_role: String::new(),
            difficulty_level: None,
            objective_question_count: String::new(),
            programming_question_count: String::new(),
            submitter_email: String::new(),
            recipient_emails: vec![String::new()],
            focus: FocusTarget::Field(FieldName::JobRole),
        }
    }
}

impl InterviewForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current textual value of a fixed field
    pub fn field_value(&self, field: FieldName) -> &str {
        match field {
            FieldName::JobRole => &self.job_role,
            FieldName::DifficultyLevel => self.difficulty_level.map_or("", |d| d.as_str()),
            FieldName::ObjectiveQuestionCount => &self.objective_question_count,
            FieldName::ProgrammingQuestionCount => &self.programming_question_count,
            FieldName::SubmitterEmail => &self.submitter_email,
        }
    }

    /// Replace a single field. Difficulty values that are not a known level unset it.
    pub fn set_field(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::JobRole => self.job_role = value,
            FieldName::DifficultyLevel => self.difficulty_level = Difficulty::parse(&value),
            FieldName::ObjectiveQuestionCount => self.objective_question_count = value,
            FieldName::ProgrammingQuestionCount => self.programming_question_count = value,
            FieldName::SubmitterEmail => self.submitter_email = value,
        }
    }

    /// Replace one recipient slot; out-of-range indices are ignored
    pub fn set_recipient(&mut self, index: usize, value: String) {
        if let Some(slot) = self.recipient_emails.get_mut(index) {
            *slot = value;
        }
    }

    /// Append an empty recipient slot
    pub fn add_recipient(&mut self) {
        self.recipient_emails.push(String::new());
    }

    pub fn can_remove_recipient(&self) -> bool {
        self.recipient_emails.len() > 1
    }

    /// Remove a recipient slot. Refused when only one slot remains.
    pub fn remove_recipient(&mut self, index: usize) -> bool {
        if !self.can_remove_recipient() || index >= self.recipient_emails.len() {
            return false;
        }
        self.recipient_emails.remove(index);

        if let FocusTarget::Recipient(focused) = self.focus {
            let last = self.recipient_emails.len() - 1;
            let focused = if focused > index { focused - 1 } else { focused };
            self.focus = FocusTarget::Recipient(focused.min(last));
        }
        true
    }

    /// Throw away every value and start from the defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Focus order: fixed fields, recipient slots, then the action buttons
    pub fn focus_order(&self) -> Vec<FocusTarget> {
        FieldName::ALL
            .iter()
            .map(|f| FocusTarget::Field(*f))
            .chain((0..self.recipient_emails.len()).map(FocusTarget::Recipient))
            .chain([FocusTarget::AddRecipient, FocusTarget::Submit])
            .collect()
    }

    /// Type a character into the focused input
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            FocusTarget::Field(FieldName::DifficultyLevel) => {
                if let Some(level) = Difficulty::from_shortcut(c) {
                    self.difficulty_level = Some(level);
                }
            }
            FocusTarget::Field(field) => {
                if field.kind().accepts_char(c) {
                    if let Some(value) = self.text_field_mut(field) {
                        value.push(c);
                    }
                }
            }
            FocusTarget::Recipient(index) => {
                if FieldKind::Text.accepts_char(c) {
                    if let Some(slot) = self.recipient_emails.get_mut(index) {
                        slot.push(c);
                    }
                }
            }
            FocusTarget::AddRecipient | FocusTarget::Submit => {}
        }
    }

    /// Delete the last character of the focused input
    pub fn pop_char(&mut self) {
        match self.focus {
            FocusTarget::Field(FieldName::DifficultyLevel) => self.difficulty_level = None,
            FocusTarget::Field(field) => {
                if let Some(value) = self.text_field_mut(field) {
                    value.pop();
                }
            }
            FocusTarget::Recipient(index) => {
                if let Some(slot) = self.recipient_emails.get_mut(index) {
                    slot.pop();
                }
            }
            FocusTarget::AddRecipient | FocusTarget::Submit => {}
        }
    }

    /// Step the difficulty selection; an unset level starts at the first or last option
    pub fn cycle_difficulty(&mut self, forward: bool) {
        self.difficulty_level = Some(match (self.difficulty_level, forward) {
            (Some(level), true) => level.next(),
            (Some(level), false) => level.prev(),
            (None, true) => Difficulty::Easy,
            (None, false) => Difficulty::Hard,
        });
    }

    fn text_field_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::JobRole => Some(&mut self.job_role),
            FieldName::ObjectiveQuestionCount => Some(&mut self.objective_question_count),
            FieldName::ProgrammingQuestionCount => Some(&mut self.programming_question_count),
            FieldName::SubmitterEmail => Some(&mut self.submitter_email),
            FieldName::DifficultyLevel => None,
        }
    }
}

impl Form for InterviewForm {
    fn field_count(&self) -> usize {
        FieldName::ALL.len() + self.recipient_emails.len() + 2
    }
    fn active_field(&self) -> usize {
        self.focus_order()
            .iter()
            .position(|target| *target == self.focus)
            .unwrap_or(0)
    }
    fn set_active_field(&mut self, index: usize) {
        let order = self.focus_order();
        let index = index.min(order.len() - 1);
        self.focus = order[index];
    }
}
