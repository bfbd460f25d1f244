//! Service implementation for the static authentication context provider.

use std::collections::HashMap;
use std::sync::Arc;

use messaging_security::{Participant, Principal, SecurityContext, ServicePrincipal};
use secrecy::ExposeSecret;
use tracing::{debug, info};

use crate::config::{AuthMode, IdentityConfig, PrincipalKind, StaticAuthContextConfig};

/// Static authentication context service.
///
/// Provides token-to-context mapping based on configuration mode:
/// - `accept_all`: Any non-empty token maps to the default identity
/// - `static_tokens`: Specific tokens map to specific identities
pub struct Service {
    mode: AuthMode,
    default_identity: IdentityConfig,
    token_map: HashMap<String, IdentityConfig>,
}

impl Service {
    /// Create a service from provider configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticAuthContextConfig) -> Self {
        let token_map: HashMap<String, IdentityConfig> = cfg
            .tokens
            .iter()
            .map(|m| (m.token.expose_secret().to_owned(), m.identity.clone()))
            .collect();

        info!(
            mode = ?cfg.mode,
            token_count = token_map.len(),
            "Static auth context provider initialized"
        );

        Self {
            mode: cfg.mode,
            default_identity: cfg.default_identity.clone(),
            token_map,
        }
    }

    /// Resolve a bearer token to an authentication context.
    ///
    /// Returns `None` if the token is not recognized (in `static_tokens` mode)
    /// or empty.
    #[must_use]
    pub fn authenticate(&self, bearer_token: &str) -> Option<SecurityContext> {
        if bearer_token.is_empty() {
            return None;
        }

        let identity = match self.mode {
            AuthMode::AcceptAll => &self.default_identity,
            AuthMode::StaticTokens => self.token_map.get(bearer_token)?,
        };

        Some(build_context(identity))
    }

    /// Like [`authenticate`](Self::authenticate), falling back to an anonymous
    /// context for unknown or missing tokens.
    #[must_use]
    pub fn context_for(&self, bearer_token: Option<&str>) -> SecurityContext {
        bearer_token
            .and_then(|token| self.authenticate(token))
            .unwrap_or_else(|| {
                debug!("No identity for request; using anonymous context");
                SecurityContext::anonymous()
            })
    }
}

impl std::fmt::Debug for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service")
            .field("mode", &self.mode)
            .field("token_count", &self.token_map.len())
            .finish_non_exhaustive()
    }
}

fn build_context(identity: &IdentityConfig) -> SecurityContext {
    let principal: Arc<dyn Principal> = match identity.kind {
        PrincipalKind::Participant => {
            Arc::new(Participant::new(identity.subject_id, identity.name.clone()))
        }
        PrincipalKind::Service => Arc::new(ServicePrincipal::new(identity.name.clone())),
    };

    SecurityContext::builder()
        .auth_level(identity.auth_level)
        .shared_principal(principal)
        .build()
}
