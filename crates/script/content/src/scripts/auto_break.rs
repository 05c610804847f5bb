//! Damage-driven early break for crowd-control auras.
//!
//! Fear, hex, entangling roots, and frost nova all break before their full
//! duration once the victim has taken enough damage. The threshold is not
//! part of the proc-chance system: it is a per-instance damage budget that
//! silently absorbs incoming hits until it runs out, at which point the
//! engine's default break behavior is allowed through.

use script_core::{
    AuraInstance, AuraScript, ContentTier, CreatureClass, EffectIndex, ProcContext, ProcResult,
    ScriptEnv, ScriptSlot,
};

use crate::ids::SPELL_GLYPH_CC_THRESHOLD;

/// Divisor applied to the caster-level base health to derive the budget.
///
/// Observed on live: rank 3 fear at level 80 breaks around 2600 damage,
/// independent of gear, target level, and rank; caster level is the only
/// input that moves it.
const BREAK_DIVISOR: f64 = 4.75;

/// The effect slot carrying the break budget; other slots of the same aura
/// proc normally.
const BUDGET_EFFECT: EffectIndex = EffectIndex::Second;

pub struct AutoBreakProc;

impl AuraScript for AutoBreakProc {
    fn name(&self) -> &'static str {
        "auto_break_proc"
    }

    fn on_init(&self, aura: &mut AuraInstance, env: &ScriptEnv<'_>) {
        if aura.effect != BUDGET_EFFECT {
            return;
        }

        // Missing caster data degrades to a zero budget: the aura becomes
        // breakable by the first hit instead of faulting.
        let mut threshold: i64 = 0;
        if let Ok(world) = env.world() {
            if let Ok(stats) = env.stats()
                && let Some(level) = world.level(aura.caster)
                && let Some(row) =
                    stats.class_level_stats(level, CreatureClass::Warrior, ContentTier::Wrath)
            {
                threshold = (f64::from(row.base_health) / BREAK_DIVISOR) as i64;
            }
            if let Some(amount) = world.modifier_amount(aura.caster, SPELL_GLYPH_CC_THRESHOLD) {
                threshold = threshold * i64::from(amount) / 100;
            }
        }

        aura.slot = ScriptSlot::DamageBudget(threshold);
    }

    fn on_proc(
        &self,
        aura: &mut AuraInstance,
        proc: &mut ProcContext,
        _env: &ScriptEnv<'_>,
    ) -> ProcResult {
        if aura.effect != BUDGET_EFFECT {
            return ProcResult::Ok;
        }
        let ScriptSlot::DamageBudget(remaining) = aura.slot else {
            return ProcResult::Ok;
        };

        // Budget exhausted: let the engine's default break run.
        if remaining - proc.damage <= 0 {
            return ProcResult::Ok;
        }

        aura.slot = ScriptSlot::DamageBudget(remaining - proc.damage);
        ProcResult::CantTrigger
    }
}
