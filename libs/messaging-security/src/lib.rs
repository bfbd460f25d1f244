#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Identity vocabulary shared by the thread authorizer crates.
//!
//! - [`AuthLevel`] - how strongly a session is authenticated
//! - [`Principal`] - whatever the authentication provider resolved
//! - [`Participant`] - the messaging identity a principal may carry
//! - [`AuthenticationContext`] - the ambient "who is logged in" collaborator
//! - [`SecurityContext`] - concrete per-request context with a builder

pub mod constants;
pub mod context;
pub mod level;
pub mod principal;

pub use context::{AuthenticationContext, SecurityContext, SecurityContextBuilder};
pub use level::AuthLevel;
pub use principal::{Participant, Principal, ServicePrincipal};
