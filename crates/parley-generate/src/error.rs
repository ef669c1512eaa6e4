use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("generation endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("generation response parsing failed: {0}")]
    Decode(#[from] serde_json::Error),
}
