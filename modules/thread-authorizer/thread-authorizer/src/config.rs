//! Configuration for the thread authorizer.

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use messaging_security::AuthLevel;
use serde::Deserialize;

/// Location of this module's section in the service configuration document.
pub const CONFIG_KEY: &str = "modules.thread_authorizer.config";

/// Prefix of environment variables that override file configuration.
pub const ENV_PREFIX: &str = "THREAD_AUTHORIZER_";

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthorizerConfig {
    /// Minimum authentication level for a session to count as logged in.
    pub required_level: AuthLevel,
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            required_level: AuthLevel::Remembered,
        }
    }
}

impl AuthorizerConfig {
    /// Load the `modules.thread_authorizer.config` section of a YAML document,
    /// then apply `THREAD_AUTHORIZER_*` environment overrides.
    ///
    /// A missing section yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid YAML or the section
    /// contains unknown fields or invalid values.
    pub fn load(yaml: &str) -> anyhow::Result<Self> {
        Figment::new()
            .merge(Yaml::string(yaml))
            .focus(CONFIG_KEY)
            .merge(Env::prefixed(ENV_PREFIX))
            .extract::<Self>()
            .context("invalid thread_authorizer configuration")
    }
}
