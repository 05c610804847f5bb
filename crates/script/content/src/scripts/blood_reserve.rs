//! Blood Reserve: stacking enchant that converts into a heal at low health.

use script_core::{
    AuraInstance, AuraScript, EffectIndex, EngineCommand, ProcContext, ProcResult, ScriptEnv,
    TriggerTarget,
};

use crate::ids::{SPELL_BLOOD_RESERVE, SPELL_BLOOD_RESERVE_HEAL};

/// Health percentage below which the reserve is allowed to break.
const TRIGGER_HEALTH_PERCENT: f32 = 35.0;

/// Consumes the whole stack into one heal once the holder drops below 35%
/// health. The aura stacks instead of refreshing, so the script removes it
/// explicitly after the proc.
pub struct BloodReserveEnchant;

impl AuraScript for BloodReserveEnchant {
    fn name(&self) -> &'static str {
        "blood_reserve_enchant"
    }

    fn on_check_proc(&self, aura: &AuraInstance, _proc: &ProcContext, env: &ScriptEnv<'_>) -> bool {
        env.world()
            .ok()
            .and_then(|w| w.health_percent(aura.target))
            .is_some_and(|percent| percent < TRIGGER_HEALTH_PERCENT)
    }

    fn on_proc(
        &self,
        aura: &mut AuraInstance,
        proc: &mut ProcContext,
        env: &ScriptEnv<'_>,
    ) -> ProcResult {
        proc.triggered_spell = Some(SPELL_BLOOD_RESERVE_HEAL);
        proc.trigger_target = TriggerTarget::SelfCast;

        // Heal scales with how many charges were banked.
        if let Ok(spells) = env.spells()
            && let Some(base) = spells.base_points(SPELL_BLOOD_RESERVE_HEAL, EffectIndex::First)
        {
            proc.basepoints[EffectIndex::First.as_usize()] = Some(base * i64::from(aura.stacks));
        }

        // Stacking aura never removes itself; do it here.
        proc.push_command(EngineCommand::RemoveAura {
            unit: aura.target,
            spell: SPELL_BLOOD_RESERVE,
        });
        ProcResult::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripts::testutil::{StubSpells, StubWorld};
    use script_core::{EntityId, Env, ScriptEnv};

    fn aura_with_stacks(stacks: u32) -> AuraInstance {
        AuraInstance::new(
            SPELL_BLOOD_RESERVE,
            EffectIndex::First,
            EntityId(1),
            EntityId(2),
        )
        .with_stacks(stacks)
    }

    fn world_at(percent: f32) -> StubWorld {
        StubWorld {
            health_percent: [(EntityId(2), percent)].into(),
            ..StubWorld::default()
        }
    }

    #[test]
    fn gate_opens_below_threshold_only() {
        let proc = ProcContext::new(EntityId(9), EntityId(2), 100);

        let healthy = world_at(80.0);
        let env: ScriptEnv<'_> = Env::new(Some(&healthy), None, None, None, None, None);
        assert!(!BloodReserveEnchant.on_check_proc(&aura_with_stacks(3), &proc, &env));

        let hurt = world_at(20.0);
        let env: ScriptEnv<'_> = Env::new(Some(&hurt), None, None, None, None, None);
        assert!(BloodReserveEnchant.on_check_proc(&aura_with_stacks(3), &proc, &env));
    }

    #[test]
    fn proc_scales_heal_by_stacks_and_consumes_aura() {
        let world = world_at(20.0);
        let spells = StubSpells(
            [((SPELL_BLOOD_RESERVE_HEAL, EffectIndex::First), 360_i64)].into(),
        );
        let env: ScriptEnv<'_> =
            Env::new(Some(&world), None, Some(&spells), None, None, None);
        let mut aura = aura_with_stacks(3);
        let mut proc = ProcContext::new(EntityId(9), EntityId(2), 100);

        let result = BloodReserveEnchant.on_proc(&mut aura, &mut proc, &env);

        assert_eq!(result, ProcResult::Ok);
        assert_eq!(proc.triggered_spell, Some(SPELL_BLOOD_RESERVE_HEAL));
        assert_eq!(proc.trigger_target, TriggerTarget::SelfCast);
        assert_eq!(proc.basepoints[0], Some(1_080));
        assert_eq!(
            proc.commands.as_slice(),
            [EngineCommand::RemoveAura {
                unit: EntityId(2),
                spell: SPELL_BLOOD_RESERVE,
            }]
        );
    }

    #[test]
    fn missing_template_leaves_default_magnitude() {
        let env = ScriptEnv::empty();
        let mut aura = aura_with_stacks(2);
        let mut proc = ProcContext::new(EntityId(9), EntityId(2), 100);

        BloodReserveEnchant.on_proc(&mut aura, &mut proc, &env);

        assert_eq!(proc.triggered_spell, Some(SPELL_BLOOD_RESERVE_HEAL));
        assert_eq!(proc.basepoints, [None, None, None]);
    }
}
