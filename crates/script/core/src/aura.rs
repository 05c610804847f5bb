//! Aura instance view and per-instance scratch state.
//!
//! An [`AuraInstance`] is owned by the engine and attached to exactly one
//! target. The caster field is a back-reference by id only: the caster may
//! outlive or predecease the aura, so scripts re-resolve it through oracles
//! on every use and never retain it across hook calls.

use crate::escort::EscortPhase;
use crate::ids::{EffectIndex, EntityId, SpellId};

/// Tagged per-instance scratch payload.
///
/// Each stateful behavior gets its own variant and is the only interpreter
/// of it; this replaces a shared untyped "script value" slot. A fresh
/// instance starts [`Empty`](ScriptSlot::Empty) until the script's
/// `on_init`/`on_apply` populates it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptSlot {
    /// No script state attached.
    #[default]
    Empty,
    /// Remaining incoming-damage budget before a crowd-control aura breaks.
    DamageBudget(i64),
    /// Current phase of the escort state machine.
    Escort(EscortPhase),
}

/// One aura instance: a persistent effect attached to a target entity.
///
/// Created by the engine on successful application and destroyed on removal
/// (expiry, dispel, stack replacement, or scripted removal). The scratch
/// slot lives exactly as long as the instance.
#[derive(Clone, Debug, PartialEq)]
pub struct AuraInstance {
    /// Spell this aura was applied from.
    pub spell: SpellId,
    /// Effect slot of the source spell this instance represents.
    pub effect: EffectIndex,
    /// Caster back-reference (weak, by id).
    pub caster: EntityId,
    /// Entity the aura is attached to.
    pub target: EntityId,
    /// Current stack count (at least 1 while the instance exists).
    pub stacks: u32,
    /// Script-forced tick period in milliseconds, if any.
    pub forced_period_ms: Option<u32>,
    /// Per-instance scratch state, interpreted only by the bound script.
    pub slot: ScriptSlot,
}

impl AuraInstance {
    /// Creates an instance of `spell`/`effect` cast by `caster` on `target`.
    pub fn new(spell: SpellId, effect: EffectIndex, caster: EntityId, target: EntityId) -> Self {
        Self {
            spell,
            effect,
            caster,
            target,
            stacks: 1,
            forced_period_ms: None,
            slot: ScriptSlot::Empty,
        }
    }

    /// Sets the stack count (builder pattern).
    #[must_use]
    pub fn with_stacks(mut self, stacks: u32) -> Self {
        self.stacks = stacks;
        self
    }

    /// Overrides the instance's periodic tick interval.
    ///
    /// The engine honors this over the spell template's default period.
    pub fn force_periodicity(&mut self, period_ms: u32) {
        self.forced_period_ms = Some(period_ms);
    }
}

/// Borrowed inputs for one scripted value calculation.
///
/// Value overrides are evaluated against caster attributes at calculation
/// time, never cached, so the context is rebuilt for every call.
#[derive(Clone, Copy, Debug)]
pub struct AuraCalcContext<'a> {
    /// Caster of the aura, if still in the world.
    pub caster: Option<EntityId>,
    /// Entity the aura is attached to.
    pub target: EntityId,
    /// The aura instance being evaluated.
    pub aura: &'a AuraInstance,
}
