//! Application state definitions

use super::forms::{QuestionForm, SubmissionCoordinator};
use super::listing::Listing;
use super::router::{Router, ASK_QUESTION_PATH, HOME_PATH};
use chrono::{DateTime, Utc};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Home page listing questions
    #[default]
    Questions,
    AskQuestion,
}

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Questions => HOME_PATH,
            Self::AskQuestion => ASK_QUESTION_PATH,
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Questions),
            p if p == ASK_QUESTION_PATH => Some(Self::AskQuestion),
            _ => None,
        }
    }

    /// Form views are skipped when going back
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::AskQuestion)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Questions => "All Questions",
            Self::AskQuestion => "Ask a Question",
        }
    }
}

/// Tag attached to a listed question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
}

/// Question as shown on the home page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub tags: Vec<TagRef>,
    pub author: Author,
    pub upvotes: u64,
    pub views: u64,
    pub answer_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Identity of a question returned by the service after creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedQuestion {
    pub id: String,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub router: Router,

    // Home page
    pub listing: Listing,

    // Ask-a-question form
    pub question_form: QuestionForm,
    pub submission: SubmissionCoordinator,

    // UI state
    pub server_connected: bool,
    /// Pending error messages shown one at a time in a dialog
    errors: Vec<String>,
}

impl AppState {
    pub fn current_view(&self) -> &View {
        self.router.current_view()
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently displayed
    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }

    /// Open a fresh ask-a-question form
    pub fn open_question_form(&mut self) {
        self.reset_question_form();
        self.router.navigate_to(View::AskQuestion);
    }

    /// Leave the form, discarding its values
    pub fn close_question_form(&mut self) {
        self.reset_question_form();
        self.router.go_back();
    }

    /// Drop the form values and any previous failure, unless a post is running
    fn reset_question_form(&mut self) {
        if self.submission.is_in_flight() {
            return;
        }
        self.question_form = QuestionForm::new();
        self.submission = SubmissionCoordinator::new();
    }
}
