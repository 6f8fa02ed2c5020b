//! Trait abstraction for the question service to enable mocking in tests

use super::ApiError;
use crate::state::{CreatedQuestion, Question, QuestionQuery, SubmissionRequest};
use async_trait::async_trait;

/// Operations the TUI needs from the question service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionApi: Send + Sync {
    /// Create a new question
    async fn create_question(
        &self,
        request: SubmissionRequest,
    ) -> Result<CreatedQuestion, ApiError>;

    /// List questions for the home page
    async fn list_questions(&self, query: &QuestionQuery) -> Result<Vec<Question>, ApiError>;
}
