//! Posting a validated question
//!
//! The coordinator owns the in-flight flag, which is the only guard against
//! double submission. A submission is split in two halves so the UI can keep
//! drawing while the request runs: [`SubmissionCoordinator::begin`] builds the
//! request, [`SubmissionCoordinator::finish`] interprets the response.

use super::question_form::FormValues;
use crate::api::ApiError;
use crate::state::router::{Navigator, HOME_PATH};
use crate::state::CreatedQuestion;
use thiserror::Error;

/// Ambient data attached to every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionContext {
    pub author_id: String,
    /// Path of the page the question was asked from
    pub path: String,
}

/// The creation request sent to the question service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub title: String,
    pub content: String,
    /// Unique, in the order the user added them
    pub tags: Vec<String>,
    pub author_id: String,
    pub path: String,
}

impl SubmissionRequest {
    pub fn new(values: &FormValues, context: &SubmissionContext) -> Self {
        Self {
            title: values.title.clone(),
            content: values.explanation.clone(),
            tags: values.tags.as_slice().to_vec(),
            author_id: context.author_id.clone(),
            path: context.path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Failed to post question: {0}")]
    Api(#[from] ApiError),
}

#[derive(Debug, Default)]
pub struct SubmissionCoordinator {
    in_flight: bool,
    last_error: Option<SubmissionError>,
}

impl SubmissionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Error from the most recent failed attempt, cleared on the next begin
    pub fn last_error(&self) -> Option<&SubmissionError> {
        self.last_error.as_ref()
    }

    /// Start a submission. Returns `None` while another one is in flight.
    ///
    /// The caller must have validated `values` already.
    pub fn begin(
        &mut self,
        values: &FormValues,
        context: &SubmissionContext,
    ) -> Option<SubmissionRequest> {
        if self.in_flight {
            tracing::debug!("Ignoring submit while a question is being posted");
            return None;
        }

        self.in_flight = true;
        self.last_error = None;
        let request = SubmissionRequest::new(values, context);
        tracing::info!(
            "Posting question {:?} with {} tag(s) from {}",
            request.title,
            request.tags.len(),
            request.path
        );
        Some(request)
    }

    /// Finish the in-flight submission with the service's response
    ///
    /// On success navigates to the home listing. On failure the form values
    /// are left untouched so the user can retry.
    pub fn finish(
        &mut self,
        outcome: Result<CreatedQuestion, ApiError>,
        navigator: &mut dyn Navigator,
    ) -> Result<CreatedQuestion, SubmissionError> {
        self.in_flight = false;

        match outcome {
            Ok(created) => {
                tracing::info!("Question {} created", created.id);
                navigator.navigate(HOME_PATH);
                Ok(created)
            }
            Err(err) => {
                tracing::error!("Failed to create question: {err}");
                let err = SubmissionError::from(err);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockQuestionApi, QuestionApi};
    use crate::state::forms::tags::TagCollection;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, path: &str) {
            self.visited.push(path.to_string());
        }
    }

    fn scenario_values() -> FormValues {
        let mut tags = TagCollection::default();
        tags.commit("css").unwrap();
        tags.commit("layout").unwrap();
        FormValues {
            title: "How do I center a div?".to_string(),
            explanation: "Flexbox is not working!!".to_string(),
            tags,
        }
    }

    fn context() -> SubmissionContext {
        SubmissionContext {
            author_id: "user-42".to_string(),
            path: "/ask-question".to_string(),
        }
    }

    #[test]
    fn test_begin_builds_request_from_values() {
        let mut coordinator = SubmissionCoordinator::new();
        let request = coordinator.begin(&scenario_values(), &context()).unwrap();

        assert_eq!(
            request,
            SubmissionRequest {
                title: "How do I center a div?".to_string(),
                content: "Flexbox is not working!!".to_string(),
                tags: vec!["css".to_string(), "layout".to_string()],
                author_id: "user-42".to_string(),
                path: "/ask-question".to_string(),
            }
        );
        assert!(coordinator.is_in_flight());
    }

    #[test]
    fn test_second_begin_while_in_flight_is_ignored() {
        let mut coordinator = SubmissionCoordinator::new();
        let values = scenario_values();

        let built: Vec<_> = (0..2)
            .filter_map(|_| coordinator.begin(&values, &context()))
            .collect();

        assert_eq!(built.len(), 1);
    }

    #[test]
    fn test_failure_keeps_error_and_allows_retry() {
        let mut coordinator = SubmissionCoordinator::new();
        let mut navigator = RecordingNavigator::default();
        let values = scenario_values();

        coordinator.begin(&values, &context()).unwrap();
        let result = coordinator.finish(
            Err(ApiError::Unavailable("connection refused".into())),
            &mut navigator,
        );

        assert_eq!(
            result,
            Err(SubmissionError::Api(ApiError::Unavailable(
                "connection refused".into()
            )))
        );
        assert!(!coordinator.is_in_flight());
        assert!(coordinator.last_error().is_some());
        assert!(navigator.visited.is_empty());

        // Retry is possible and clears the previous error
        assert!(coordinator.begin(&values, &context()).is_some());
        assert!(coordinator.last_error().is_none());
    }

    #[tokio::test]
    async fn test_success_navigates_home() {
        let mut api = MockQuestionApi::new();
        api.expect_create_question()
            .withf(|request| {
                request.title == "How do I center a div?"
                    && request.content == "Flexbox is not working!!"
                    && request.tags == vec!["css".to_string(), "layout".to_string()]
                    && request.author_id == "user-42"
            })
            .times(1)
            .returning(|_| {
                Ok(CreatedQuestion {
                    id: "q-1".to_string(),
                })
            });

        let mut coordinator = SubmissionCoordinator::new();
        let mut navigator = RecordingNavigator::default();

        let request = coordinator.begin(&scenario_values(), &context()).unwrap();
        let outcome = api.create_question(request).await;
        let created = coordinator.finish(outcome, &mut navigator).unwrap();

        assert_eq!(created.id, "q-1");
        assert_eq!(navigator.visited, vec![HOME_PATH.to_string()]);
        assert!(!coordinator.is_in_flight());
    }

    #[test]
    fn test_rejection_does_not_navigate() {
        let mut api = MockQuestionApi::new();
        api.expect_create_question()
            .times(1)
            .returning(|_| Err(ApiError::Rejected("Title already exists".into())));

        let mut coordinator = SubmissionCoordinator::new();
        let mut navigator = RecordingNavigator::default();

        let request = coordinator.begin(&scenario_values(), &context()).unwrap();
        let outcome = tokio_test::block_on(api.create_question(request));
        let result = coordinator.finish(outcome, &mut navigator);

        assert!(matches!(
            result,
            Err(SubmissionError::Api(ApiError::Rejected(_)))
        ));
        assert!(navigator.visited.is_empty());
    }
}
