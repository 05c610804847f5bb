//! Spell template lookups.

use crate::ids::{EffectIndex, SpellId};

/// Read-only access to static spell template data.
pub trait SpellOracle: Send + Sync {
    /// Returns the template base points of one effect slot of a spell.
    ///
    /// `None` when the spell or slot is absent from the template store;
    /// scripts leave the engine's default magnitude in place in that case.
    fn base_points(&self, spell: SpellId, effect: EffectIndex) -> Option<i64>;
}
