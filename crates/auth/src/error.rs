//! Identity provider errors

use manticore_common::Error;

/// Errors raised while talking to the external identity provider
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("identity provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("identity provider response malformed: {0}")]
    Malformed(String),
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        Error::Internal(err.to_string())
    }
}
