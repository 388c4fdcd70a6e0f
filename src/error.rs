use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimplifyError {
    #[error("Unrecognized paint kind: {0}")]
    UnrecognizedPaintKind(String),

    #[error("Malformed {kind} paint: {reason}")]
    MalformedPaint { kind: String, reason: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimplifyError>;
