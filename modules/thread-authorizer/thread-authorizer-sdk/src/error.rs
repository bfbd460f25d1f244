//! Error types for the thread authorizer.

use thiserror::Error;

/// Errors returned by [`ThreadAuthorizer`](crate::ThreadAuthorizer) checks.
///
/// Every variant is a wiring problem between the authentication provider and
/// the messaging module. Ordinary access denial is `Ok(false)` / `Ok(None)`,
/// never an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorizerError {
    /// The session is authenticated, but its principal is not a participant.
    #[error("configuration error: principal '{principal}' does not satisfy the participant contract")]
    NotAParticipant {
        /// Name of the offending principal.
        principal: String,
    },

    /// The session is authenticated, but no principal is attached to it.
    #[error("configuration error: authenticated session carries no principal")]
    MissingPrincipal,
}
