//! Thread models for the thread authorizer.

use std::collections::HashSet;

use messaging_security::Participant;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A conversation whose membership can be tested.
///
/// Implemented by whatever the persistence layer loads; the authorizer never
/// mutates it.
pub trait Thread: Send + Sync {
    /// Whether `participant` is a member of this thread.
    fn is_participant(&self, participant: &Participant) -> bool;
}

/// Thread id plus the ids of its members.
///
/// Useful when the caller already has the member list at hand (a cached
/// inbox row, a projection) and does not want to load the full thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadMembership {
    /// Thread identifier.
    pub thread_id: Uuid,
    /// Member participant ids.
    #[serde(default)]
    pub participants: HashSet<Uuid>,
}

impl ThreadMembership {
    #[must_use]
    pub fn new(thread_id: Uuid) -> Self {
        Self {
            thread_id,
            participants: HashSet::new(),
        }
    }

    /// Add a member.
    #[must_use]
    pub fn with_participant(mut self, participant: &Participant) -> Self {
        self.participants.insert(participant.id());
        self
    }

    /// Add several members by id.
    #[must_use]
    pub fn with_participant_ids(mut self, ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.participants.extend(ids);
        self
    }

    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

impl Thread for ThreadMembership {
    fn is_participant(&self, participant: &Participant) -> bool {
        self.participants.contains(&participant.id())
    }
}
