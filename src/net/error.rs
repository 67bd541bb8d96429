//! Failure taxonomy for auth and profile calls.
//!
//! ERROR HANDLING
//! ==============
//! Errors are caught at the call site and written into session state for
//! inline display; they never propagate into the router or a guard. A
//! corrupt persisted session is not an error at all: it restores to an
//! anonymous session.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// What went wrong while talking to the auth/profile endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend was unreachable or the request could not be sent.
    #[error("could not reach the server: {0}")]
    Network(String),
    /// The backend rejected the request (non-2xx), e.g. bad credentials.
    #[error("{message}")]
    Credential { status: u16, message: String },
    /// A client-side form check failed; no request was made.
    #[error("{0}")]
    Validation(String),
}

impl AuthError {
    /// Build a rejection from an HTTP status and the backend's error body
    /// message, when it provided one.
    pub fn from_status(status: u16, message: Option<String>) -> AuthError {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("request failed: {status}"));
        AuthError::Credential { status, message }
    }
}
