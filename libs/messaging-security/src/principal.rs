//! Principals resolved by the authentication provider.
//!
//! A [`Principal`] is whatever the provider attached to the session. Only
//! principals that expose a [`Participant`] through
//! [`Principal::as_participant`] can take part in messaging threads.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity attached to an authenticated session.
///
/// Implementors that represent a messaging actor override
/// [`as_participant`](Principal::as_participant); every other principal
/// (service accounts, admin tools, ...) keeps the default `None`.
pub trait Principal: fmt::Debug + Send + Sync {
    /// Human-readable name, used in logs and error messages.
    fn principal_name(&self) -> &str;

    /// The participant this principal acts as, if it satisfies the participant contract.
    fn as_participant(&self) -> Option<&Participant> {
        None
    }
}

/// The authenticated actor's identity in the messaging domain.
///
/// Equality and hashing consider the id only; the name is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    id: Uuid,
    name: String,
}

impl Participant {
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Participant {}

impl Hash for Participant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Principal for Participant {
    fn principal_name(&self) -> &str {
        &self.name
    }

    fn as_participant(&self) -> Option<&Participant> {
        Some(self)
    }
}

/// A machine identity. Authenticated, but never a thread participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePrincipal {
    name: String,
}

impl ServicePrincipal {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Principal for ServicePrincipal {
    fn principal_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn uuid(s: &str) -> Uuid {
        Uuid::parse_str(s).unwrap()
    }

    #[test]
    fn participant_equality_ignores_name() {
        let id = uuid("550e8400-e29b-41d4-a716-446655440001");
        let a = Participant::new(id, "alice");
        let b = Participant::new(id, "alice (renamed)");

        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn participants_with_different_ids_differ() {
        let a = Participant::new(uuid("550e8400-e29b-41d4-a716-446655440001"), "same");
        let b = Participant::new(uuid("550e8400-e29b-41d4-a716-446655440002"), "same");

        assert_ne!(a, b);
    }

    #[test]
    fn participant_satisfies_participant_contract() {
        let p = Participant::new(uuid("550e8400-e29b-41d4-a716-446655440001"), "alice");
        let principal: &dyn Principal = &p;

        assert_eq!(principal.principal_name(), "alice");
        assert_eq!(principal.as_participant(), Some(&p));
    }

    #[test]
    fn service_principal_is_not_a_participant() {
        let svc = ServicePrincipal::new("indexer");
        let principal: &dyn Principal = &svc;

        assert_eq!(principal.principal_name(), "indexer");
        assert!(principal.as_participant().is_none());
    }

    #[test]
    fn participant_serialize_deserialize() {
        let original = Participant::new(uuid("550e8400-e29b-41d4-a716-446655440001"), "alice");

        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: Participant = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, original);
        assert_eq!(deserialized.name(), "alice");
    }
}
