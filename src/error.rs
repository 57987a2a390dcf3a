use thiserror::Error;

/// Failures crossing the gateway and storage boundaries.
///
/// Presentation code never sees these: every fetch path converts them to a
/// safe empty document before the view-model is assembled. They exist so the
/// conversion sites can log what actually went wrong.
#[derive(Debug, Error)]
pub enum Error {
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("gateway returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("malformed upstream payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
