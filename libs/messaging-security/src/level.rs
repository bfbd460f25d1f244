//! Authentication strength levels.

use serde::{Deserialize, Serialize};

/// How strongly the current session is authenticated.
///
/// Levels are ordered: a context granted [`AuthLevel::Fully`] is also granted
/// [`AuthLevel::Remembered`] and [`AuthLevel::Anonymous`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AuthLevel {
    /// A session exists but nobody has logged in.
    #[default]
    Anonymous,
    /// Logged in through a remember-me cookie or equivalent.
    Remembered,
    /// Logged in during this session.
    Fully,
}

impl AuthLevel {
    /// Whether a session at this level satisfies `required`.
    #[must_use]
    pub fn satisfies(self, required: AuthLevel) -> bool {
        self >= required
    }
}
