use std::path::PathBuf;

use crate::retrieve::transport::TransportError;

static LOGIN_HINT: &str = "Run: npx firebase-tools login";

/// Fatal failures. Any of these aborts the run before (or instead of) the
/// delete loop; per-record delete failures live in `cleanup::DeleteFailed`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} not found")]
    SettingMissing(&'static str),

    #[error("Firebase CLI not logged in ({}). {}", .path.display(), LOGIN_HINT)]
    ConfigMissing { path: PathBuf },

    #[error("No refresh token found. {}", LOGIN_HINT)]
    CredentialMissing,

    #[error("Token refresh failed: {0}")]
    AuthFailed(String),

    #[error("Failed to list attendance_logs ({status}): {body}")]
    FetchFailed { status: u16, body: String },

    #[error("{0}")]
    Unexpected(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Unexpected(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Unexpected(e.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::Unexpected(e.to_string())
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Unexpected(e.to_string())
    }
}
