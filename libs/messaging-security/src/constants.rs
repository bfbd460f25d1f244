//! Well-known identifiers used by development providers and tests.

use uuid::{Uuid, uuid};

/// Participant returned by development providers when no identity is configured.
pub const DEFAULT_PARTICIPANT_ID: Uuid = uuid!("11111111-6a88-4768-9dfc-6bcd5187d9ed");

/// Display name paired with [`DEFAULT_PARTICIPANT_ID`].
pub const DEFAULT_PARTICIPANT_NAME: &str = "default-participant";
