use thiserror::Error;

/// Errors surfaced by the client to the pages.
///
/// `Display` always carries the underlying message so a page can put it
/// straight into its alert region.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a usable HTTP response (network, CORS, HTTP status).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote service rejected the call with a non-zero gRPC status.
    #[error("{message}")]
    Status { code: i32, message: String },

    /// The response payload was not a valid message.
    #[error("Decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The gRPC-web framing of the response was malformed.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Invalid client configuration (e.g. an endpoint without a scheme).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// gRPC status code of a remote rejection, if this is one.
    pub fn status_code(&self) -> Option<i32> {
        match self {
            ClientError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
