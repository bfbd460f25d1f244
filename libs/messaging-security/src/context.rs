use std::sync::Arc;

use crate::level::AuthLevel;
use crate::principal::Principal;

/// The ambient authentication subsystem, as seen by authorization checks.
///
/// Answers "how strongly is this session authenticated" and "who is logged in".
/// Typically one instance per request or connection.
pub trait AuthenticationContext: Send + Sync {
    /// Whether the session is authenticated at least at `level`.
    fn is_granted(&self, level: AuthLevel) -> bool;

    /// The principal attached to the session, if any.
    fn current_principal(&self) -> Option<&dyn Principal>;
}

/// `SecurityContext` carries the authentication state of a single request.
///
/// Built by the authentication provider and handed to authorizers as an
/// [`AuthenticationContext`].
#[derive(Debug, Clone, Default)]
pub struct SecurityContext {
    /// Strength of the current login.
    auth_level: AuthLevel,
    /// Principal resolved by the provider. `None` for anonymous sessions.
    principal: Option<Arc<dyn Principal>>,
}

impl SecurityContext {
    /// Create a new `SecurityContext` builder
    #[must_use]
    pub fn builder() -> SecurityContextBuilder {
        SecurityContextBuilder::default()
    }

    /// Create an anonymous `SecurityContext` with no principal
    #[must_use]
    pub fn anonymous() -> Self {
        SecurityContextBuilder::default().build()
    }

    /// Get the authentication level of the session
    #[must_use]
    pub fn auth_level(&self) -> AuthLevel {
        self.auth_level
    }

    /// Get the principal attached to the session
    #[must_use]
    pub fn principal(&self) -> Option<&Arc<dyn Principal>> {
        self.principal.as_ref()
    }
}

impl AuthenticationContext for SecurityContext {
    fn is_granted(&self, level: AuthLevel) -> bool {
        self.auth_level.satisfies(level)
    }

    fn current_principal(&self) -> Option<&dyn Principal> {
        self.principal.as_deref()
    }
}

#[derive(Default)]
pub struct SecurityContextBuilder {
    auth_level: Option<AuthLevel>,
    principal: Option<Arc<dyn Principal>>,
}

impl SecurityContextBuilder {
    #[must_use]
    pub fn auth_level(mut self, level: AuthLevel) -> Self {
        self.auth_level = Some(level);
        self
    }

    #[must_use]
    pub fn principal(mut self, principal: impl Principal + 'static) -> Self {
        self.principal = Some(Arc::new(principal));
        self
    }

    #[must_use]
    pub fn shared_principal(mut self, principal: Arc<dyn Principal>) -> Self {
        self.principal = Some(principal);
        self
    }

    #[must_use]
    pub fn build(self) -> SecurityContext {
        SecurityContext {
            auth_level: self.auth_level.unwrap_or_default(),
            principal: self.principal,
        }
    }
}
