#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Authentication Context Provider
//!
//! Builds a [`SecurityContext`](messaging_security::SecurityContext) per
//! request from a bearer token, using a static mapping. Meant for development
//! and end-to-end tests of messaging flows.
//!
//! ## Modes
//!
//! - **`accept_all`** (default): Accepts any non-empty token, returns the configured default identity.
//! - **`static_tokens`**: Maps specific tokens to specific identities. Useful for tests
//!   with distinct participants, service accounts, or remember-me sessions.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_auth_context:
//!     config:
//!       mode: static_tokens
//!       default_identity:
//!         kind: participant
//!         subject_id: "11111111-6a88-4768-9dfc-6bcd5187d9ed"
//!         name: "default-participant"
//!         auth_level: remembered
//!       tokens:
//!         - token: "token-alice"
//!           identity:
//!             subject_id: "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa"
//!             name: "alice"
//!         - token: "token-indexer"
//!           identity:
//!             kind: service
//!             name: "indexer"
//!             auth_level: fully
//! ```

pub mod config;
pub mod domain;

pub use config::StaticAuthContextConfig;
pub use domain::Service;
