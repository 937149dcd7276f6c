//! Application state and core logic

use crate::config::EndpointSource;
use crate::platform::has_action_modifier;
use crate::state::{
    AppState, FieldName, FocusTarget, FormAction, PendingSubmission, Phase, SubmissionEvent,
};
use crate::webhook::SubmissionClientTrait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spinner frames for the busy indicator
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where the webhook URL was resolved from, if anywhere
    pub endpoint_source: Option<EndpointSource>,
    /// Spinner position while a submission is in flight
    pub spinner_frame: usize,
    /// Webhook client shared with submission tasks
    client: Arc<dyn SubmissionClientTrait>,
    events_tx: mpsc::UnboundedSender<SubmissionEvent>,
    events_rx: mpsc::UnboundedReceiver<SubmissionEvent>,
    /// Task awaiting the in-flight submission
    submission_task: Option<JoinHandle<()>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(
        client: Arc<dyn SubmissionClientTrait>,
        endpoint_source: Option<EndpointSource>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            endpoint_source,
            spinner_frame: 0,
            client,
            events_tx,
            events_rx,
            submission_task: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_loading(&self) -> bool {
        self.state.phase == Phase::Loading
    }

    pub fn endpoint_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Advance the busy indicator animation
    pub fn tick(&mut self) {
        if self.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        } else {
            self.spinner_frame = 0;
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Apply finished submissions reported by background tasks
    pub fn poll_submissions(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            if self.state.in_flight == Some(event.id) {
                self.submission_task = None;
            }
            self.dispatch(FormAction::SubmissionFinished(event));
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }
        if key.code == KeyCode::Char('r') && has_action_modifier(&key) {
            self.reset();
            return;
        }

        match self.state.phase {
            Phase::Form | Phase::Loading => self.handle_form_key(key),
            Phase::Success => self.handle_success_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let focus = self.state.form.focus;
        let action = match key.code {
            KeyCode::Esc if !self.is_loading() => {
                self.quit = true;
                return;
            }
            KeyCode::Tab | KeyCode::Down => FormAction::FocusNext,
            KeyCode::BackTab | KeyCode::Up => FormAction::FocusPrev,
            KeyCode::Char('s') if has_action_modifier(&key) => FormAction::Submit,
            KeyCode::Char('a') if has_action_modifier(&key) => FormAction::AddRecipient,
            KeyCode::Char('d') if has_action_modifier(&key) => match focus {
                FocusTarget::Recipient(index) => FormAction::RemoveRecipient(index),
                _ => return,
            },
            KeyCode::Enter if !focus.is_button() => FormAction::FocusNext,
            KeyCode::Enter => match focus {
                FocusTarget::AddRecipient => FormAction::AddRecipient,
                _ => FormAction::Submit,
            },
            KeyCode::Left | KeyCode::Right
                if focus == FocusTarget::Field(FieldName::DifficultyLevel) =>
            {
                FormAction::CycleDifficulty {
                    forward: key.code == KeyCode::Right,
                }
            }
            KeyCode::Char(c) if !has_action_modifier(&key) => FormAction::InputChar(c),
            KeyCode::Backspace => FormAction::Backspace,
            _ => return,
        };
        self.dispatch(action);
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Start over: cancel any in-flight request and restore the default form
    fn reset(&mut self) {
        if let Some(task) = self.submission_task.take() {
            tracing::info!("Cancelling in-flight submission");
            task.abort();
        }
        self.dispatch(FormAction::Reset);
    }

    /// Run an action through the reducer and start any resulting submission
    fn dispatch(&mut self, action: FormAction) {
        if let Some(pending) = self.state.apply(action) {
            self.spawn_submission(pending);
        }
    }

    fn spawn_submission(&mut self, pending: PendingSubmission) {
        let client = Arc::clone(&self.client);
        let events_tx = self.events_tx.clone();

        let task = tokio::spawn(async move {
            let outcome = client.submit(&pending.payload).await;
            if events_tx
                .send(SubmissionEvent {
                    id: pending.id,
                    outcome,
                })
                .is_err()
            {
                tracing::debug!(id = %pending.id, "App gone before submission finished");
            }
        });
        self.submission_task = Some(task);
    }
}
