//! Domain layer for the thread authorizer.

pub mod service;

pub use service::Authorizer;
