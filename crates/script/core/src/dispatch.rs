//! Engine-facing dispatch over registered scripts.
//!
//! The dispatcher is the single entry point the cast/aura pipeline calls
//! at each lifecycle moment. It owns the ordering contract the scripts
//! rely on:
//!
//! - `evaluate_proc` runs the `on_check_proc` gate first; a false gate
//!   short-circuits and `on_proc` is never invoked, so no state mutates.
//! - `aura_applied` precedes the first `periodic_tick_end` of an instance.
//! - `aura_removed` is unconditional; scripts treat it as final.
//!
//! Every method no-ops (or returns the neutral value) when no script is
//! bound to the spell, so the generic data-driven path stays zero-cost.

use crate::aura::{AuraCalcContext, AuraInstance};
use crate::cast::{CastContext, CastResult};
use crate::command::CommandBuf;
use crate::env::ScriptEnv;
use crate::ids::{EffectIndex, EntityId};
use crate::proc::{ProcContext, ProcResult};
use crate::registry::BehaviorRegistry;

/// Borrow-only facade over a built [`BehaviorRegistry`].
#[derive(Clone, Copy)]
pub struct ScriptDispatcher<'a> {
    registry: &'a BehaviorRegistry,
}

impl<'a> ScriptDispatcher<'a> {
    /// Creates a dispatcher over a frozen registry.
    pub fn new(registry: &'a BehaviorRegistry) -> Self {
        Self { registry }
    }

    // ===== spell lifecycle =====

    /// Runs `on_init` when targeting resolution begins.
    pub fn cast_init(&self, cast: &mut CastContext) {
        if let Some(script) = self.registry.spell_script(cast.spell) {
            tracing::trace!(spell = cast.spell.0, script = script.name(), "cast_init");
            script.on_init(cast);
        }
    }

    /// Validates the cast; unscripted spells always pass.
    pub fn check_cast(&self, cast: &CastContext, env: &ScriptEnv<'_>, strict: bool) -> CastResult {
        match self.registry.spell_script(cast.spell) {
            Some(script) => {
                let result = script.on_check_cast(cast, env, strict);
                if let CastResult::Failed(reason) = result {
                    tracing::debug!(
                        spell = cast.spell.0,
                        script = script.name(),
                        %reason,
                        "cast rejected"
                    );
                }
                result
            }
            None => CastResult::Ok,
        }
    }

    /// Filters one candidate target for one effect slot.
    pub fn check_target(
        &self,
        cast: &CastContext,
        env: &ScriptEnv<'_>,
        target: EntityId,
        effect: EffectIndex,
    ) -> bool {
        match self.registry.spell_script(cast.spell) {
            Some(script) => script.on_check_target(cast, env, target, effect),
            None => true,
        }
    }

    /// Runs `on_cast` at the cast moment.
    pub fn cast_fired(&self, cast: &mut CastContext, env: &ScriptEnv<'_>) {
        if let Some(script) = self.registry.spell_script(cast.spell) {
            tracing::trace!(spell = cast.spell.0, script = script.name(), "on_cast");
            script.on_cast(cast, env);
        }
    }

    /// Runs `on_effect_execute` for one resolved effect slot.
    pub fn effect_execute(&self, cast: &mut CastContext, env: &ScriptEnv<'_>, effect: EffectIndex) {
        if let Some(script) = self.registry.spell_script(cast.spell) {
            script.on_effect_execute(cast, env, effect);
        }
    }

    // ===== aura lifecycle =====

    /// Runs `on_init` when an aura instance is created, pre-attachment.
    pub fn aura_init(&self, aura: &mut AuraInstance, env: &ScriptEnv<'_>) {
        if let Some(script) = self.registry.aura_script(aura.spell) {
            tracing::trace!(spell = aura.spell.0, script = script.name(), "aura_init");
            script.on_init(aura, env);
        }
    }

    /// Runs `on_apply(applying = true)` on attachment.
    pub fn aura_applied(&self, aura: &mut AuraInstance, env: &ScriptEnv<'_>) -> CommandBuf {
        let mut out = CommandBuf::new();
        if let Some(script) = self.registry.aura_script(aura.spell) {
            tracing::debug!(
                spell = aura.spell.0,
                target = aura.target.0,
                script = script.name(),
                "aura applied"
            );
            script.on_apply(aura, env, true, &mut out);
        }
        out
    }

    /// Runs `on_apply(applying = false)` on removal.
    ///
    /// Unconditional: called for expiry, dispel, stack replacement, and
    /// scripted removal alike. The instance may be destroyed right after.
    pub fn aura_removed(&self, aura: &mut AuraInstance, env: &ScriptEnv<'_>) -> CommandBuf {
        let mut out = CommandBuf::new();
        if let Some(script) = self.registry.aura_script(aura.spell) {
            tracing::debug!(
                spell = aura.spell.0,
                target = aura.target.0,
                script = script.name(),
                "aura removed"
            );
            script.on_apply(aura, env, false, &mut out);
        }
        out
    }

    /// Runs the scripted value override for one calculation.
    pub fn aura_value_calc(
        &self,
        calc: &AuraCalcContext<'_>,
        env: &ScriptEnv<'_>,
        value: i64,
    ) -> i64 {
        match self.registry.aura_script(calc.aura.spell) {
            Some(script) => script.on_value_calc(calc, env, value),
            None => value,
        }
    }

    /// Evaluates one proc: gate first, then execution.
    ///
    /// A false gate suppresses the proc entirely: `on_proc` is not
    /// invoked, no out-parameter is set, and no command is queued.
    pub fn evaluate_proc(
        &self,
        aura: &mut AuraInstance,
        proc: &mut ProcContext,
        env: &ScriptEnv<'_>,
    ) -> ProcResult {
        let Some(script) = self.registry.aura_script(aura.spell) else {
            return ProcResult::Ok;
        };

        if !script.on_check_proc(aura, proc, env) {
            tracing::trace!(
                spell = aura.spell.0,
                script = script.name(),
                "proc gated off"
            );
            return ProcResult::Failed;
        }

        let result = script.on_proc(aura, proc, env);
        if result == ProcResult::CantTrigger {
            tracing::trace!(
                spell = aura.spell.0,
                script = script.name(),
                damage = proc.damage,
                "proc absorbed"
            );
        }
        result
    }

    /// Runs `on_periodic_tick_end` after a completed tick interval.
    pub fn periodic_tick_end(&self, aura: &mut AuraInstance, env: &ScriptEnv<'_>) -> CommandBuf {
        let mut out = CommandBuf::new();
        if let Some(script) = self.registry.aura_script(aura.spell) {
            script.on_periodic_tick_end(aura, env, &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::hooks::AuraScript;
    use crate::ids::SpellId;

    /// Counts hook invocations; gate answer is fixed at construction.
    struct CountingScript {
        gate: bool,
        checks: AtomicU32,
        procs: AtomicU32,
    }

    impl CountingScript {
        fn new(gate: bool) -> Self {
            Self {
                gate,
                checks: AtomicU32::new(0),
                procs: AtomicU32::new(0),
            }
        }
    }

    impl AuraScript for CountingScript {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_check_proc(
            &self,
            _aura: &AuraInstance,
            _proc: &ProcContext,
            _env: &ScriptEnv<'_>,
        ) -> bool {
            self.checks.fetch_add(1, Ordering::Relaxed);
            self.gate
        }

        fn on_proc(
            &self,
            _aura: &mut AuraInstance,
            proc: &mut ProcContext,
            _env: &ScriptEnv<'_>,
        ) -> ProcResult {
            self.procs.fetch_add(1, Ordering::Relaxed);
            proc.triggered_spell = Some(SpellId(64569));
            ProcResult::Ok
        }
    }

    fn setup(gate: bool) -> (BehaviorRegistry, Arc<CountingScript>) {
        let script = Arc::new(CountingScript::new(gate));
        let mut builder = BehaviorRegistry::builder();
        builder
            .bind_aura(SpellId(64568), Arc::clone(&script) as Arc<dyn AuraScript>)
            .unwrap();
        (builder.build(), script)
    }

    #[test]
    fn closed_gate_suppresses_proc_entirely() {
        let (registry, script) = setup(false);
        let dispatcher = ScriptDispatcher::new(&registry);
        let mut aura = AuraInstance::new(
            SpellId(64568),
            EffectIndex::First,
            EntityId(1),
            EntityId(2),
        );
        let mut proc = ProcContext::new(EntityId(3), EntityId(2), 500);

        let result = dispatcher.evaluate_proc(&mut aura, &mut proc, &ScriptEnv::empty());

        assert_eq!(result, ProcResult::Failed);
        assert_eq!(script.checks.load(Ordering::Relaxed), 1);
        assert_eq!(script.procs.load(Ordering::Relaxed), 0);
        assert!(proc.triggered_spell.is_none());
        assert!(proc.commands.is_empty());
    }

    #[test]
    fn open_gate_runs_proc_after_check() {
        let (registry, script) = setup(true);
        let dispatcher = ScriptDispatcher::new(&registry);
        let mut aura = AuraInstance::new(
            SpellId(64568),
            EffectIndex::First,
            EntityId(1),
            EntityId(2),
        );
        let mut proc = ProcContext::new(EntityId(3), EntityId(2), 500);

        let result = dispatcher.evaluate_proc(&mut aura, &mut proc, &ScriptEnv::empty());

        assert_eq!(result, ProcResult::Ok);
        assert_eq!(script.checks.load(Ordering::Relaxed), 1);
        assert_eq!(script.procs.load(Ordering::Relaxed), 1);
        assert_eq!(proc.triggered_spell, Some(SpellId(64569)));
    }

    #[test]
    fn unscripted_spell_is_transparent() {
        let registry = BehaviorRegistry::builder().build();
        let dispatcher = ScriptDispatcher::new(&registry);
        let mut aura =
            AuraInstance::new(SpellId(999), EffectIndex::First, EntityId(1), EntityId(2));
        let mut proc = ProcContext::new(EntityId(3), EntityId(2), 500);

        let result = dispatcher.evaluate_proc(&mut aura, &mut proc, &ScriptEnv::empty());
        assert_eq!(result, ProcResult::Ok);

        let cast = CastContext::new(EntityId(1), SpellId(999));
        assert!(dispatcher
            .check_cast(&cast, &ScriptEnv::empty(), true)
            .is_ok());
    }
}
