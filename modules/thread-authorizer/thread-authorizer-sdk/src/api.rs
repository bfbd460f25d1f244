//! Public API trait for the thread authorizer.

use messaging_security::Participant;

use crate::error::AuthorizerError;
use crate::models::Thread;

/// Public API trait for the thread authorizer.
///
/// Implementations are bound to one authentication context (usually one per
/// request) and answer questions about the participant behind it:
///
/// ```ignore
/// let authorizer = Authorizer::new(Arc::new(security_context));
///
/// match authorizer.authenticated_participant()? {
///     Some(me) => render_inbox(me),
///     None => redirect_to_login(),
/// }
/// ```
///
/// A denial is `Ok(false)`. `Err` means the authentication provider is wired
/// to something that is not a messaging participant and must not be treated
/// as a denial.
pub trait ThreadAuthorizer: Send + Sync {
    /// Whether the session is authenticated strongly enough for messaging.
    fn is_authenticated(&self) -> bool;

    /// The participant behind the session, or `None` when not authenticated.
    ///
    /// # Errors
    ///
    /// - `NotAParticipant` if the session principal does not satisfy the participant contract
    /// - `MissingPrincipal` if the session is authenticated without a principal
    fn authenticated_participant(&self) -> Result<Option<&Participant>, AuthorizerError>;

    /// Whether the current participant may see `thread`.
    ///
    /// # Errors
    ///
    /// Same as [`authenticated_participant`](ThreadAuthorizer::authenticated_participant).
    fn can_see_thread(&self, thread: &dyn Thread) -> Result<bool, AuthorizerError>;

    /// Whether the current participant may delete `thread`.
    ///
    /// # Errors
    ///
    /// Same as [`authenticated_participant`](ThreadAuthorizer::authenticated_participant).
    fn can_delete_thread(&self, thread: &dyn Thread) -> Result<bool, AuthorizerError>;
}
