#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Thread Authorizer SDK
//!
//! This crate provides the public API for the `thread_authorizer` module:
//!
//! - [`ThreadAuthorizer`] - Public API trait for consumers
//! - [`Thread`] - Membership contract a thread must satisfy
//! - [`ThreadMembership`] - In-memory thread membership model
//! - [`AuthorizerError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use thread_authorizer_sdk::ThreadAuthorizer;
//!
//! let authorizer: Arc<dyn ThreadAuthorizer> = /* built per request */;
//!
//! if !authorizer.can_see_thread(&thread)? {
//!     return Err(NotFound);
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::ThreadAuthorizer;
pub use error::AuthorizerError;
pub use models::{Thread, ThreadMembership};

pub use messaging_security::{AuthLevel, Participant, Principal};
