//! Application state and the submission workflow reducer

use super::forms::{FieldName, FocusTarget, Form, InterviewForm};
use super::payload::{build_payload, SubmissionPayload};
use super::validation::validate;
use crate::webhook::{SubmissionError, SubmissionResult};
use chrono::Utc;
use uuid::Uuid;

/// Which screen the workflow is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Editing the form
    #[default]
    Form,
    /// Form visible, one submission in flight, submit disabled
    Loading,
    /// Confirmation view replacing the form
    Success,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Form => "Form",
            Self::Loading => "Sending",
            Self::Success => "Sent",
        }
    }
}

/// Completion report from a submission task
#[derive(Debug, Clone)]
pub struct SubmissionEvent {
    pub id: Uuid,
    pub outcome: Result<SubmissionResult, SubmissionError>,
}

/// A validated submission ready to be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub id: Uuid,
    pub payload: SubmissionPayload,
}

/// Every event the workflow reacts to
#[derive(Debug, Clone)]
pub enum FormAction {
    SetField(FieldName, String),
    SetRecipient(usize, String),
    AddRecipient,
    RemoveRecipient(usize),
    InputChar(char),
    Backspace,
    FocusNext,
    FocusPrev,
    CycleDifficulty { forward: bool },
    Submit,
    SubmissionFinished(SubmissionEvent),
    Reset,
}

impl FormAction {
    /// Actions that change form values or focus
    fn is_edit(&self) -> bool {
        !matches!(
            self,
            FormAction::Submit | FormAction::SubmissionFinished(_) | FormAction::Reset
        )
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: Phase,
    pub form: InterviewForm,
    /// Set once a submission completes successfully
    pub result: Option<SubmissionResult>,
    /// Banner shown above the actions row
    pub error: Option<SubmissionError>,
    /// Submission currently awaited; responses with any other id are dropped
    pub in_flight: Option<Uuid>,
}

impl AppState {
    /// Apply one action. Returns the submission to dispatch when a submit passes validation.
    pub fn apply(&mut self, action: FormAction) -> Option<PendingSubmission> {
        if action.is_edit() && self.phase != Phase::Form {
            tracing::debug!(phase = ?self.phase, "Ignoring edit outside form phase");
            return None;
        }

        match action {
            FormAction::SetField(field, value) => self.form.set_field(field, value),
            FormAction::SetRecipient(index, value) => self.form.set_recipient(index, value),
            FormAction::AddRecipient => {
                self.form.add_recipient();
                self.form.focus = FocusTarget::Recipient(self.form.recipient_emails.len() - 1);
            }
            FormAction::RemoveRecipient(index) => {
                if !self.form.remove_recipient(index) {
                    tracing::debug!(index, "Refused to remove recipient slot");
                }
            }
            FormAction::InputChar(c) => self.form.push_char(c),
            FormAction::Backspace => self.form.pop_char(),
            FormAction::FocusNext => self.form.next_field(),
            FormAction::FocusPrev => self.form.prev_field(),
            FormAction::CycleDifficulty { forward } => self.form.cycle_difficulty(forward),
            FormAction::Submit => return self.submit(),
            FormAction::SubmissionFinished(event) => self.finish(event),
            FormAction::Reset => self.reset(),
        }
        None
    }

    fn submit(&mut self) -> Option<PendingSubmission> {
        if self.phase != Phase::Form {
            return None;
        }
        self.result = None;
        self.error = None;

        let payload = match validate(&self.form)
            .and_then(|recipients| build_payload(&self.form, recipients, Utc::now()))
        {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(reason = %e, "Submission blocked by validation");
                self.error = Some(e.into());
                return None;
            }
        };

        let id = Uuid::new_v4();
        tracing::info!(
            %id,
            recipients = payload.recipient_emails.len(),
            "Dispatching submission"
        );
        self.phase = Phase::Loading;
        self.in_flight = Some(id);
        Some(PendingSubmission { id, payload })
    }

    fn finish(&mut self, event: SubmissionEvent) {
        if self.in_flight != Some(event.id) {
            tracing::debug!(id = %event.id, "Dropping stale submission outcome");
            return;
        }
        self.in_flight = None;

        match event.outcome {
            Ok(result) => {
                tracing::info!(id = %event.id, "Submission succeeded");
                self.result = Some(result);
                self.phase = Phase::Success;
            }
            Err(e) => {
                match &e {
                    SubmissionError::Unknown(detail) => {
                        tracing::error!(id = %event.id, %detail, "Submission failed")
                    }
                    other => {
                        tracing::warn!(id = %event.id, kind = other.kind(), "Submission failed")
                    }
                }
                self.error = Some(e);
                self.phase = Phase::Form;
            }
        }
    }

    fn reset(&mut self) {
        tracing::info!("Resetting form");
        self.form.reset();
        self.result = None;
        self.error = None;
        self.in_flight = None;
        self.phase = Phase::Form;
    }
}
