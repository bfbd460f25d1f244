//! Domain layer for the static authentication context provider.

pub mod service;

pub use service::Service;
