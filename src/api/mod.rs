//! Question service client module for gRPC communication

mod client;
mod error;
mod traits;

pub use client::QuestionClient;
pub use error::ApiError;
pub use traits::QuestionApi;

#[cfg(test)]
pub use traits::MockQuestionApi;
