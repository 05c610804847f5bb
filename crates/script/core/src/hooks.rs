//! Extension-point contracts for spell and aura behavior scripts.
//!
//! A behavior script implements the subset of hooks it cares about; every
//! method has a default no-op body, so an unimplemented hook costs one
//! virtual call and nothing else. The engine invokes hooks synchronously on
//! its pipeline thread at fixed lifecycle points; scripts never block,
//! never spawn, and never keep borrowed engine objects past the call.
//!
//! Scripts are stateless across instances of the same spell. State that
//! must survive between hook invocations of one aura instance lives in the
//! instance's [`ScriptSlot`](crate::aura::ScriptSlot).

use crate::aura::{AuraCalcContext, AuraInstance};
use crate::cast::{CastContext, CastResult};
use crate::command::CommandBuf;
use crate::env::ScriptEnv;
use crate::ids::{EffectIndex, EntityId};
use crate::proc::{ProcContext, ProcResult};

/// Hooks into the cast lifecycle of one spell.
pub trait SpellScript: Send + Sync {
    /// Script name for registration diagnostics and logging.
    fn name(&self) -> &'static str;

    /// Called once when a cast begins targeting resolution.
    ///
    /// May constrain the maximum target count and bias selection priority
    /// through the context's selection parameters. Side effects only on
    /// `cast`.
    fn on_init(&self, cast: &mut CastContext) {
        let _ = cast;
    }

    /// Validates whether the cast may proceed given already-chosen targets.
    ///
    /// Called speculatively, possibly without the cast completing, so it
    /// must be read-only with respect to world state. Failures carry a
    /// specific reason, never a generic one.
    fn on_check_cast(&self, cast: &CastContext, env: &ScriptEnv<'_>, strict: bool) -> CastResult {
        let _ = (cast, env, strict);
        CastResult::Ok
    }

    /// Per-candidate filter applied during target enumeration.
    ///
    /// Returning false removes the candidate from the target list for that
    /// effect only. Must be idempotent and side-effect-free; filtering out
    /// every candidate yields a cast with no effect, not an error.
    fn on_check_target(
        &self,
        cast: &CastContext,
        env: &ScriptEnv<'_>,
        target: EntityId,
        effect: EffectIndex,
    ) -> bool {
        let _ = (cast, env, target, effect);
        true
    }

    /// Fires once at the cast moment, before effects resolve.
    ///
    /// The place for target-independent side effects, queued as commands.
    fn on_cast(&self, cast: &mut CastContext, env: &ScriptEnv<'_>) {
        let _ = (cast, env);
    }

    /// Fires once per resolved effect slot, after target and magnitude
    /// resolution. The place for target-specific follow-on effects.
    fn on_effect_execute(&self, cast: &mut CastContext, env: &ScriptEnv<'_>, effect: EffectIndex) {
        let _ = (cast, env, effect);
    }
}

/// Hooks into the lifecycle of one aura instance.
pub trait AuraScript: Send + Sync {
    /// Script name for registration diagnostics and logging.
    fn name(&self) -> &'static str;

    /// Called once when the instance is created, before attachment.
    ///
    /// Computes caster-dependent constants into the instance's scratch
    /// slot. Must tolerate missing caster data (degrade, don't fault).
    fn on_init(&self, aura: &mut AuraInstance, env: &ScriptEnv<'_>) {
        let _ = (aura, env);
    }

    /// Called on application (`applying == true`) and removal (`false`).
    ///
    /// Removal is the only teardown hook and may be followed by instance
    /// destruction with no further calls, so it must release everything the
    /// script acquired on application, unconditionally and idempotently.
    fn on_apply(
        &self,
        aura: &mut AuraInstance,
        env: &ScriptEnv<'_>,
        applying: bool,
        out: &mut CommandBuf,
    ) {
        let _ = (aura, env, applying, out);
    }

    /// Overrides a computed magnitude (e.g. an absorb amount).
    ///
    /// Evaluated against caster attributes at call time; implementations
    /// must recompute every call and never cache.
    fn on_value_calc(&self, calc: &AuraCalcContext<'_>, env: &ScriptEnv<'_>, value: i64) -> i64 {
        let _ = (calc, env);
        value
    }

    /// Gate evaluated before [`on_proc`](Self::on_proc); returning false
    /// suppresses the proc entirely. Must be side-effect-free.
    fn on_check_proc(&self, aura: &AuraInstance, proc: &ProcContext, env: &ScriptEnv<'_>) -> bool {
        let _ = (aura, proc, env);
        true
    }

    /// Executes the triggered effect of a proc that passed the gate.
    fn on_proc(
        &self,
        aura: &mut AuraInstance,
        proc: &mut ProcContext,
        env: &ScriptEnv<'_>,
    ) -> ProcResult {
        let _ = (aura, proc, env);
        ProcResult::Ok
    }

    /// Invoked once per completed tick interval.
    ///
    /// The extension point for multi-step state machines.
    fn on_periodic_tick_end(
        &self,
        aura: &mut AuraInstance,
        env: &ScriptEnv<'_>,
        out: &mut CommandBuf,
    ) {
        let _ = (aura, env, out);
    }
}
