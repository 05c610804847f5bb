//! Replenishment: raid-wide mana restoration with scripted targeting.

use script_core::{
    CastContext, EffectIndex, EntityId, MapKind, ScriptEnv, SpellScript, TargetScheme,
};

/// Caps target selection at ten and prefers the most mana-starved
/// candidates; inside a battle arena the spell collapses to caster-only.
pub struct Replenishment;

impl SpellScript for Replenishment {
    fn name(&self) -> &'static str {
        "replenishment"
    }

    fn on_init(&self, cast: &mut CastContext) {
        cast.set_max_affected_targets(10);
        cast.set_filtering_scheme(EffectIndex::First, TargetScheme::PrioritizeMana);
    }

    fn on_check_target(
        &self,
        cast: &CastContext,
        _env: &ScriptEnv<'_>,
        target: EntityId,
        _effect: EffectIndex,
    ) -> bool {
        // In arenas only the caster benefits.
        if cast.map == MapKind::BattleArena && target != cast.caster {
            return false;
        }
        true
    }
}
