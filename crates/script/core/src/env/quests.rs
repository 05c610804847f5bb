//! Quest progress lookups.

use crate::ids::{EntityId, QuestId};

/// A player's standing on one quest.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum QuestStatus {
    /// The player never took the quest, or abandoned it.
    #[default]
    NotStarted,
    /// Taken and still being worked on.
    InProgress,
    /// All objectives done, reward not yet turned in.
    Complete,
    /// Failed (timer ran out, escort died).
    Failed,
    /// Turned in.
    Rewarded,
}

/// Lookup of quest progress by player and quest id.
///
/// Persistence of quest state is entirely the host engine's concern.
pub trait QuestOracle: Send + Sync {
    /// Returns the player's status for a quest.
    ///
    /// Unknown players report [`QuestStatus::NotStarted`]; a disconnected
    /// escort follower therefore terminates the escort the same way an
    /// abandoned quest does.
    fn status(&self, player: EntityId, quest: QuestId) -> QuestStatus;
}
