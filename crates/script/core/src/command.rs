//! Engine commands queued by script hooks.
//!
//! Scripts never mutate the world directly. Every side effect a hook wants
//! (a triggered cast, a movement order, quest credit) is pushed into a
//! [`CommandBuf`] and executed by the host engine in its next synchronous
//! pipeline pass. This keeps hook decision logic pure and independently
//! testable: a test asserts on the queued commands instead of on world state.

use crate::cast::CastFlags;
use crate::ids::{CreatureEntry, DisplayId, EntityId, SpellId};

/// A single world mutation requested by a script hook.
///
/// Commands are requests, not guarantees: the engine validates each one
/// against current world state before executing it (the referenced entity
/// may have despawned since the hook ran).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineCommand {
    /// Queue a spell cast. `target: None` means self/implicit targeting.
    CastSpell {
        caster: EntityId,
        target: Option<EntityId>,
        spell: SpellId,
        flags: CastFlags,
    },

    /// Re-template a creature to a different entry, keeping the instance.
    TransformEntry {
        unit: EntityId,
        entry: CreatureEntry,
    },

    /// Override a unit's display model.
    SetDisplay { unit: EntityId, display: DisplayId },

    /// Push a follow movement order onto the unit's generator stack.
    FollowUnit {
        follower: EntityId,
        target: EntityId,
        distance: f32,
        angle: f32,
    },

    /// Replace the unit's current movement with an idle generator.
    IdleMovement { unit: EntityId },

    /// Stop the unit's in-progress movement immediately.
    StopMovement { unit: EntityId },

    /// Grant a player kill/quest credit for a creature entry.
    GrantKillCredit {
        player: EntityId,
        entry: CreatureEntry,
    },

    /// Remove all aura instances of a spell from a unit.
    RemoveAura { unit: EntityId, spell: SpellId },

    /// Remove the unit from the world after a delay.
    DespawnAfter { unit: EntityId, delay_ms: u32 },

    /// Set the unit's respawn delay so it can reappear as a fresh instance.
    SetRespawnDelay { unit: EntityId, delay_ms: u32 },

    /// Adjust one enemy's threat against a unit by a percentage (-101
    /// removes the unit from the enemy's threat list entirely).
    ModifyThreatPercent {
        enemy: EntityId,
        unit: EntityId,
        percent: i32,
    },
}

/// Buffer of commands produced by one hook invocation.
///
/// Drained and executed by the engine after the hook returns.
pub type CommandBuf = Vec<EngineCommand>;
