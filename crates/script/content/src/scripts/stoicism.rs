//! Stoicism: absorb shield sized from the caster's current max health.

use script_core::{AuraCalcContext, AuraScript, ScriptEnv};

/// Absorb fraction of the caster's maximum health.
const ABSORB_FRACTION: f64 = 0.20;

/// Overrides the absorb amount with 20% of the caster's max health,
/// re-read at every calculation so health buffs applied after the aura
/// still count.
pub struct StoicismAbsorb;

impl AuraScript for StoicismAbsorb {
    fn name(&self) -> &'static str {
        "stoicism_absorb"
    }

    fn on_value_calc(&self, calc: &AuraCalcContext<'_>, env: &ScriptEnv<'_>, value: i64) -> i64 {
        let max_health = calc
            .caster
            .and_then(|caster| env.world().ok().and_then(|w| w.max_health(caster)));

        match max_health {
            Some(health) => (f64::from(health) * ABSORB_FRACTION) as i64,
            // Caster gone: keep the engine-computed value.
            None => value,
        }
    }
}
