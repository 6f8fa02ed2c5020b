//! Errors returned by the question service client

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Invalid server address: {0}")]
    InvalidAddress(String),
    #[error("Question service unavailable: {0}")]
    Unavailable(String),
    /// The service answered but refused the request
    #[error("Rejected by server: {0}")]
    Rejected(String),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Background request failed: {0}")]
    TaskFailed(String),
}

impl From<tonic::Status> for ApiError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::Unavailable | tonic::Code::DeadlineExceeded => {
                ApiError::Unavailable(status.message().to_string())
            }
            tonic::Code::InvalidArgument
            | tonic::Code::AlreadyExists
            | tonic::Code::PermissionDenied
            | tonic::Code::Unauthenticated
            | tonic::Code::FailedPrecondition => ApiError::Rejected(status.message().to_string()),
            _ => ApiError::Transport(status.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_status_maps_to_unavailable() {
        let err = ApiError::from(tonic::Status::unavailable("connection refused"));
        assert_eq!(err, ApiError::Unavailable("connection refused".into()));
    }

    #[test]
    fn test_invalid_argument_maps_to_rejected() {
        let err = ApiError::from(tonic::Status::invalid_argument("title too short"));
        assert_eq!(err, ApiError::Rejected("title too short".into()));
    }

    #[test]
    fn test_other_codes_map_to_transport() {
        let err = ApiError::from(tonic::Status::internal("boom"));
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn test_display_includes_reason() {
        let err = ApiError::Rejected("duplicate".into());
        assert_eq!(err.to_string(), "Rejected by server: duplicate");
    }
}
