//! gRPC client for communicating with the question service
//!
//! Wraps the generated `QuestionService` client and converts between proto
//! messages and the TUI's own types.

use super::{ApiError, QuestionApi};
use crate::state::{Author, CreatedQuestion, Question, QuestionQuery, SubmissionRequest, TagRef};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tonic::transport::{Channel, Endpoint};

// Include the generated proto types
pub mod proto {
    tonic::include_proto!("overflow");
}

use proto::question_service_client::QuestionServiceClient;

/// Number of questions requested for the home page
const PAGE_SIZE: u32 = 20;

/// Client for communicating with the question service
#[derive(Clone)]
pub struct QuestionClient {
    /// The gRPC client; the channel connects on first use
    client: QuestionServiceClient<Channel>,
    /// The server address
    address: String,
}

impl QuestionClient {
    /// Create a client for `address`. No connection is made until the first request.
    pub fn new(address: &str) -> Result<Self, ApiError> {
        let channel = Endpoint::from_shared(address.to_string())
            .map_err(|e| ApiError::InvalidAddress(format!("{address}: {e}")))?
            .connect_lazy();

        Ok(Self {
            client: QuestionServiceClient::new(channel),
            address: address.to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl QuestionApi for QuestionClient {
    async fn create_question(
        &self,
        request: SubmissionRequest,
    ) -> Result<CreatedQuestion, ApiError> {
        let mut client = self.client.clone();

        let response = client
            .create_question(tonic::Request::new(create_request_to_proto(request)))
            .await?
            .into_inner();

        if !response.success {
            return Err(ApiError::Rejected(if response.error.is_empty() {
                "question was not created".to_string()
            } else {
                response.error
            }));
        }

        Ok(CreatedQuestion {
            id: response.question_id,
        })
    }

    async fn list_questions(&self, query: &QuestionQuery) -> Result<Vec<Question>, ApiError> {
        let mut client = self.client.clone();

        let request = tonic::Request::new(proto::ListQuestionsRequest {
            search_query: query.search_query.clone(),
            filter: query.filter.value().to_string(),
            page: 1,
            page_size: PAGE_SIZE,
        });

        let response = client.list_questions(request).await?.into_inner();

        Ok(response
            .questions
            .into_iter()
            .map(question_from_proto)
            .collect())
    }
}

fn create_request_to_proto(request: SubmissionRequest) -> proto::CreateQuestionRequest {
    proto::CreateQuestionRequest {
        title: request.title,
        content: request.content,
        tags: request.tags,
        author_id: request.author_id,
        path: request.path,
    }
}

fn question_from_proto(q: proto::Question) -> Question {
    let author = q.author.unwrap_or_default();
    Question {
        id: q.id,
        title: q.title,
        tags: q
            .tags
            .into_iter()
            .map(|t| TagRef {
                id: t.id,
                name: t.name,
            })
            .collect(),
        author: Author {
            id: author.id,
            name: author.name,
        },
        upvotes: q.upvotes.max(0) as u64,
        views: q.views.max(0) as u64,
        answer_count: q.answer_count,
        created_at: parse_timestamp(&q.created_at),
    }
}

/// Parse an RFC 3339 timestamp, falling back to now
fn parse_timestamp(s: &str) -> DateTime<Utc> {
    if s.is_empty() {
        return Utc::now();
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
