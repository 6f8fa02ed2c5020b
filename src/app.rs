//! Application state and core logic

use crate::api::{ApiError, QuestionApi, QuestionClient};
use crate::config::TuiConfig;
use crate::state::{
    AppState, CreatedQuestion, FormFocus, QuestionForm, SubmissionContext, View,
};
use crate::theme::ThemeProvider;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Question service client
    api: Arc<dyn QuestionApi>,
    /// Server address shown in the status bar
    pub server_address: String,
    /// User configuration, written back on shutdown
    config: TuiConfig,
    /// Author attached to posted questions
    author_id: Option<String>,
    /// Active theme
    pub theme: ThemeProvider,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    /// Question creation running in the background
    pending_submission: Option<JoinHandle<Result<CreatedQuestion, ApiError>>>,
}

impl App {
    /// Create a new App instance connected to the configured server
    pub async fn new(config: TuiConfig) -> Result<Self> {
        let server_address = config.server_address();
        let client = QuestionClient::new(&server_address)?;
        tracing::info!("Using question service at {}", client.address());

        let author_id = config.author_id();
        let mut app = Self::with_api(config, Arc::new(client), server_address);
        app.author_id = author_id;
        app.refresh_questions().await;
        Ok(app)
    }

    /// Create an App around any question service implementation
    ///
    /// Only the config file supplies the author id here; `new` applies the
    /// environment override.
    pub fn with_api(config: TuiConfig, api: Arc<dyn QuestionApi>, server_address: String) -> Self {
        let mut state = AppState::default();
        state.listing.filter = config.default_filter.unwrap_or_default();

        Self {
            state,
            api,
            server_address,
            theme: ThemeProvider::init(&config),
            author_id: config.author_id_with(None),
            config,
            quit: false,
            status_message: None,
            pending_submission: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message);
    }

    /// Hand the theme back to the configuration and persist it
    pub fn shutdown(self) -> Result<()> {
        let mut config = self.config;
        self.theme.teardown(&mut config);
        config.save()
    }

    /// Reload the home page listing
    pub async fn refresh_questions(&mut self) {
        let query = self.state.listing.query();
        match self.api.list_questions(&query).await {
            Ok(questions) => {
                tracing::debug!("Loaded {} question(s)", questions.len());
                self.state.server_connected = true;
                self.state.listing.set_questions(questions);
            }
            Err(err) => {
                tracing::warn!("Failed to load questions: {err}");
                self.state.server_connected = false;
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view().clone() {
            View::Questions => self.handle_questions_key(key).await?,
            View::AskQuestion => self.handle_ask_question_key(key)?,
        }

        Ok(())
    }

    /// Handle keys on the home page
    async fn handle_questions_key(&mut self, key: KeyEvent) -> Result<()> {
        let listing = &mut self.state.listing;

        if listing.search_focused {
            match key.code {
                KeyCode::Char(c) => listing.search_push(c),
                KeyCode::Backspace => listing.search_pop(),
                KeyCode::Esc => listing.search_focused = false,
                KeyCode::Enter => {
                    listing.search_focused = false;
                    self.refresh_questions().await;
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('/') => listing.search_focused = true,
            KeyCode::Char('j') | KeyCode::Down => listing.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => listing.move_selection_up(),
            KeyCode::Char('f') => {
                listing.cycle_filter();
                self.refresh_questions().await;
            }
            KeyCode::Char('r') => self.refresh_questions().await,
            KeyCode::Char('t') => self.theme.cycle(),
            KeyCode::Char('a') | KeyCode::Char('n') => self.state.open_question_form(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the ask-a-question form
    fn handle_ask_question_key(&mut self, key: KeyEvent) -> Result<()> {
        let form = &mut self.state.question_form;

        match key.code {
            KeyCode::Tab => form.next_focus(),
            KeyCode::BackTab => form.prev_focus(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_question();
            }
            KeyCode::Esc => {
                if self.state.submission.is_in_flight() {
                    self.status_message = Some("Posting in progress...".to_string());
                } else {
                    self.state.close_question_form();
                }
            }
            KeyCode::Enter => match form.focus() {
                FormFocus::Title => form.next_focus(),
                FormFocus::Explanation => form.newline(),
                FormFocus::Tags => {
                    // The rejection is already shown on the tags field
                    let _ = form.commit_tag_input();
                }
                FormFocus::SubmitButton => self.submit_question(),
            },
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c)
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and start posting it
    ///
    /// Does nothing while a previous submission is in flight.
    pub fn submit_question(&mut self) {
        if self.state.submission.is_in_flight() {
            tracing::debug!("Submit ignored, question already posting");
            return;
        }

        let Some(values) = self.state.question_form.prepare_submit() else {
            return;
        };

        let Some(author_id) = self.author_id.clone() else {
            self.push_error(
                "No author id configured. Set OVERFLOW_AUTHOR_ID or author_id in config.json.",
            );
            return;
        };

        let context = SubmissionContext {
            author_id,
            path: self.state.router.current_path().to_string(),
        };

        let Some(request) = self.state.submission.begin(&values, &context) else {
            return;
        };
        self.state.question_form.mark_submitting();

        let api = Arc::clone(&self.api);
        self.pending_submission = Some(tokio::spawn(async move {
            api.create_question(request).await
        }));
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_submission.is_some()
    }

    /// Complete the background submission once its request has resolved
    pub async fn poll_submission(&mut self) {
        if !self
            .pending_submission
            .as_ref()
            .is_some_and(JoinHandle::is_finished)
        {
            return;
        }
        let Some(handle) = self.pending_submission.take() else {
            return;
        };

        let outcome = handle
            .await
            .unwrap_or_else(|e| Err(ApiError::TaskFailed(e.to_string())));

        self.state.question_form.mark_editing();
        match self.state.submission.finish(outcome, &mut self.state.router) {
            Ok(_) => {
                self.state.question_form = QuestionForm::new();
                self.status_message = Some("Question posted!".to_string());
                self.refresh_questions().await;
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }
}
