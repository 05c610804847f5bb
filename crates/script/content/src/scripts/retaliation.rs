//! Retaliation: counterattack proc for the dummy-creature variant.

use script_core::{
    AuraInstance, AuraScript, CastFlags, EngineCommand, ProcContext, ProcResult, ScriptEnv,
};

use crate::ids::SPELL_RETALIATION_STRIKE;

/// Strikes back at any attacker that hits from the front.
pub struct RetaliationDummy;

impl AuraScript for RetaliationDummy {
    fn name(&self) -> &'static str {
        "retaliation_dummy"
    }

    fn on_proc(
        &self,
        _aura: &mut AuraInstance,
        proc: &mut ProcContext,
        env: &ScriptEnv<'_>,
    ) -> ProcResult {
        let Ok(world) = env.world() else {
            return ProcResult::Failed;
        };

        // No retaliation against attacks from behind.
        if world.is_facing_back(proc.victim, proc.attacker) {
            return ProcResult::Failed;
        }

        let (caster, target) = (proc.victim, proc.attacker);
        proc.push_command(EngineCommand::CastSpell {
            caster,
            target: Some(target),
            spell: SPELL_RETALIATION_STRIKE,
            flags: CastFlags::FORCED,
        });
        ProcResult::Ok
    }
}
