//! Thread authorizer service.

use std::sync::Arc;

use messaging_security::{AuthLevel, AuthenticationContext, Participant};
use thread_authorizer_sdk::{AuthorizerError, Thread, ThreadAuthorizer};
use tracing::{debug, warn};

use crate::config::AuthorizerConfig;

/// Authorizer bound to one authentication context.
///
/// Holds no mutable state; cloning is cheap (`Arc` inside). Build one per
/// request from the request's context:
///
/// ```ignore
/// let authorizer = Authorizer::with_config(Arc::new(ctx), &cfg);
/// if authorizer.can_see_thread(&thread)? { /* ... */ }
/// ```
#[derive(Clone)]
pub struct Authorizer {
    context: Arc<dyn AuthenticationContext>,
    required_level: AuthLevel,
}

impl Authorizer {
    /// Create an authorizer with the default policy.
    #[must_use]
    pub fn new(context: Arc<dyn AuthenticationContext>) -> Self {
        Self::with_config(context, &AuthorizerConfig::default())
    }

    /// Create an authorizer with an explicit configuration.
    #[must_use]
    pub fn with_config(context: Arc<dyn AuthenticationContext>, cfg: &AuthorizerConfig) -> Self {
        Self {
            context,
            required_level: cfg.required_level,
        }
    }

    /// Create an authorizer that owns `context`.
    #[must_use]
    pub fn for_context(context: impl AuthenticationContext + 'static) -> Self {
        Self::new(Arc::new(context))
    }

    /// Minimum level a session must be granted to count as authenticated.
    #[must_use]
    pub fn required_level(&self) -> AuthLevel {
        self.required_level
    }
}

impl ThreadAuthorizer for Authorizer {
    fn is_authenticated(&self) -> bool {
        self.context.is_granted(self.required_level)
    }

    fn authenticated_participant(&self) -> Result<Option<&Participant>, AuthorizerError> {
        if !self.is_authenticated() {
            return Ok(None);
        }

        let Some(principal) = self.context.current_principal() else {
            warn!(
                required_level = ?self.required_level,
                "Authenticated session carries no principal"
            );
            return Err(AuthorizerError::MissingPrincipal);
        };

        let participant = principal.as_participant().ok_or_else(|| {
            warn!(
                principal = %principal.principal_name(),
                "Session principal does not satisfy the participant contract"
            );
            AuthorizerError::NotAParticipant {
                principal: principal.principal_name().to_owned(),
            }
        })?;

        Ok(Some(participant))
    }

    #[tracing::instrument(skip_all)]
    fn can_see_thread(&self, thread: &dyn Thread) -> Result<bool, AuthorizerError> {
        let Some(participant) = self.authenticated_participant()? else {
            debug!("Thread hidden: session is not authenticated");
            return Ok(false);
        };

        let allowed = thread.is_participant(participant);
        debug!(participant_id = %participant.id(), allowed, "Evaluated thread visibility");
        Ok(allowed)
    }

    // Same rule as visibility; no separate delete permission exists yet.
    fn can_delete_thread(&self, thread: &dyn Thread) -> Result<bool, AuthorizerError> {
        self.can_see_thread(thread)
    }
}

impl std::fmt::Debug for Authorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authorizer")
            .field("required_level", &self.required_level)
            .finish_non_exhaustive()
    }
}
