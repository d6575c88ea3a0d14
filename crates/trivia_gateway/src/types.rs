use trivia_core::{FetchRequest, QuestionId, QuestionPage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    FetchCompleted {
        request: FetchRequest,
        result: Result<QuestionPage, FetchError>,
    },
    DeleteCompleted {
        question_id: QuestionId,
        result: Result<(), FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("malformed response body")]
    Decode,
    #[error("network error")]
    Network,
}
