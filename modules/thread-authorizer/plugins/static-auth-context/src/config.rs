//! Configuration for the static authentication context provider.

use messaging_security::AuthLevel;
use messaging_security::constants::{DEFAULT_PARTICIPANT_ID, DEFAULT_PARTICIPANT_NAME};
use secrecy::SecretString;
use serde::Deserialize;
use uuid::Uuid;

/// Provider configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAuthContextConfig {
    /// Authentication mode.
    pub mode: AuthMode,

    /// Default identity returned in `accept_all` mode.
    pub default_identity: IdentityConfig,

    /// Static token-to-identity mappings for `static_tokens` mode.
    pub tokens: Vec<TokenMapping>,
}

impl Default for StaticAuthContextConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::AcceptAll,
            default_identity: IdentityConfig::default(),
            tokens: Vec::new(),
        }
    }
}

/// Authentication mode.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Accept any non-empty token and return the default identity.
    #[default]
    AcceptAll,
    /// Map specific tokens to specific identities.
    StaticTokens,
}

/// What kind of principal an identity resolves to.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalKind {
    /// A messaging participant.
    #[default]
    Participant,
    /// A machine identity that is not a participant.
    Service,
}

/// Identity configuration for a subject.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
    /// Principal kind.
    pub kind: PrincipalKind,

    /// Subject ID. Ignored for service principals.
    pub subject_id: Uuid,

    /// Display name.
    pub name: String,

    /// Strength of the resulting session.
    pub auth_level: AuthLevel,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            kind: PrincipalKind::Participant,
            subject_id: DEFAULT_PARTICIPANT_ID,
            name: DEFAULT_PARTICIPANT_NAME.to_owned(),
            auth_level: AuthLevel::Remembered,
        }
    }
}

/// Maps a static token to a specific identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenMapping {
    /// The bearer token value to match. Redacted in `Debug` output.
    pub token: SecretString,
    /// The identity to return when this token is presented.
    #[serde(default)]
    pub identity: IdentityConfig,
}
