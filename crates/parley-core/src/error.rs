use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}
