#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Thread Authorizer
//!
//! Resolves the participant behind an authentication context and decides
//! whether that participant may see or delete a messaging thread.
//!
//! ## Policy
//!
//! - A session counts as authenticated when it is granted the configured
//!   level (`remembered` by default, so remember-me logins qualify).
//! - A thread is visible iff the session is authenticated and its
//!   participant is a member of the thread.
//! - Deleting a thread requires exactly the same as seeing it.
//! - An authenticated session whose principal is not a participant is a
//!   configuration error, never a silent denial.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   thread_authorizer:
//!     config:
//!       required_level: remembered
//! ```

pub mod config;
pub mod domain;

pub use config::AuthorizerConfig;
pub use domain::Authorizer;
