use thiserror::Error;

#[derive(Debug, Error)]
pub enum H3UdfError {
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no result exists: {0}")]
    NoResultExists(String),

    #[error("{0}")]
    IncomparableInputs(String),

    #[error("invalid JSON list: {0}")]
    Json(#[from] serde_json::Error),
}

impl H3UdfError {
    /// `true` for failures that mean "the answer is undefined" rather than
    /// "the caller passed something wrong".
    pub fn is_no_result(&self) -> bool {
        matches!(self, Self::NoResultExists(_))
    }
}

pub type Result<T> = std::result::Result<T, H3UdfError>;
