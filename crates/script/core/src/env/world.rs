//! World-state queries scripts are allowed to make.

use crate::ids::{CreatureEntry, EntityId, SpellId};

/// Read-only view of live world state.
///
/// Everything here re-resolves by id on every call: scripts hold weak
/// references only, and any query may come back empty because the entity
/// despawned between hook invocations.
pub trait WorldOracle: Send + Sync {
    /// Returns true if the entity is a player character.
    fn is_player(&self, entity: EntityId) -> bool;

    /// Returns the creature template entry of the entity, if it is a
    /// creature that still exists.
    fn entry(&self, entity: EntityId) -> Option<CreatureEntry>;

    /// Returns the entity's level, if it still exists.
    fn level(&self, entity: EntityId) -> Option<u32>;

    /// Returns the entity's maximum health, if it still exists.
    fn max_health(&self, entity: EntityId) -> Option<u32>;

    /// Returns the entity's current health as a percentage (0.0–100.0).
    fn health_percent(&self, entity: EntityId) -> Option<f32>;

    /// Returns true if `other` is behind `unit` (attack from the back).
    fn is_facing_back(&self, unit: EntityId, other: EntityId) -> bool;

    /// Creatures of the given entry within `radius` yards of `origin`, in
    /// engine grid-iteration order.
    fn creatures_in_radius(
        &self,
        origin: EntityId,
        entry: CreatureEntry,
        radius: f32,
    ) -> Vec<EntityId>;

    /// Enemies whose threat list contains only `unit`.
    fn sole_threat_attackers(&self, unit: EntityId) -> Vec<EntityId> {
        let _ = unit;
        Vec::new()
    }

    /// Amount of a modifier aura the entity currently holds (glyph-class
    /// effects), looked up by the modifier's own spell id.
    fn modifier_amount(&self, entity: EntityId, spell: SpellId) -> Option<i32> {
        let _ = (entity, spell);
        None
    }
}
