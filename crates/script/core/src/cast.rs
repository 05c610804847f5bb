//! Per-cast context and cast validation results.
//!
//! A [`CastContext`] is owned by the engine for the duration of one cast.
//! It exposes the caster, the declared target, per-effect resolved target
//! lists, and the mutable selection parameters scripts may adjust during
//! `on_init`. It is destroyed when the cast resolves.

use crate::command::{CommandBuf, EngineCommand};
use crate::ids::{EntityId, MAX_SPELL_EFFECTS, SpellId};

bitflags::bitflags! {
    /// Modifiers for casts a script queues through [`EngineCommand::CastSpell`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CastFlags: u32 {
        /// Cast is a triggered side effect, not a player-initiated action.
        const TRIGGERED            = 1 << 0;
        /// Skip hit/miss/resist calculation.
        const IGNORE_HIT_CALC      = 1 << 1;
        /// Do not interrupt the caster's current cast.
        const IGNORE_CURRENT_CAST  = 1 << 2;
        /// Bypass the global cooldown.
        const IGNORE_GCD           = 1 << 3;
        /// Bypass resource costs.
        const IGNORE_COSTS         = 1 << 4;
    }
}

impl CastFlags {
    /// Flag set for fully out-of-band counterattack procs.
    pub const FORCED: CastFlags = CastFlags::IGNORE_HIT_CALC
        .union(CastFlags::IGNORE_CURRENT_CAST)
        .union(CastFlags::IGNORE_GCD)
        .union(CastFlags::IGNORE_COSTS);
}

/// Target-selection bias a script may request during `on_init`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TargetScheme {
    /// Prefer candidates with the lowest mana fraction.
    PrioritizeMana,
    /// Prefer candidates with the lowest health fraction.
    PrioritizeHealth,
}

/// Specific, caller-visible reason a cast may not proceed.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CastFailure {
    /// The declared target is not a legal target for this spell.
    BadTargets,
    /// Target enumeration produced no candidates at all.
    NoValidTargets,
    /// The declared target is out of the spell's range.
    OutOfRange,
    /// The cast was interrupted before validation completed.
    Interrupted,
}

/// Outcome of cast validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastResult {
    /// The cast may proceed.
    Ok,
    /// The cast is rejected with a specific reason.
    Failed(CastFailure),
}

impl CastResult {
    /// Returns true if the cast may proceed.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Kind of map the cast happens on, as far as scripts care.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MapKind {
    /// Open world or dungeon.
    #[default]
    World,
    /// Rated battle arena; several spells restrict targeting here.
    BattleArena,
}

/// Transient context for one spell cast, engine-owned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CastContext {
    /// The casting entity.
    pub caster: EntityId,
    /// The declared unit target, if the spell has one.
    pub unit_target: Option<EntityId>,
    /// Resolved target lists, one per effect slot.
    pub targets: [Vec<EntityId>; MAX_SPELL_EFFECTS],
    /// The spell being cast.
    pub spell: SpellId,
    /// Map kind the caster is on when the cast starts.
    pub map: MapKind,
    /// Deterministic seed for this cast's random rolls.
    pub seed: u64,

    /// Cap on how many targets selection may keep (script-set).
    pub max_affected_targets: Option<u32>,
    /// Selection bias for one effect slot (script-set).
    pub filtering: Option<(crate::ids::EffectIndex, TargetScheme)>,

    /// Commands queued by hooks during this cast.
    pub commands: CommandBuf,
}

impl CastContext {
    /// Creates a context for a cast of `spell` by `caster`.
    pub fn new(caster: EntityId, spell: SpellId) -> Self {
        Self {
            caster,
            spell,
            ..Self::default()
        }
    }

    /// Sets the declared unit target (builder pattern).
    #[must_use]
    pub fn with_unit_target(mut self, target: EntityId) -> Self {
        self.unit_target = Some(target);
        self
    }

    /// Sets the map kind (builder pattern).
    #[must_use]
    pub fn with_map(mut self, map: MapKind) -> Self {
        self.map = map;
        self
    }

    /// Sets the deterministic seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Caps the number of targets selection may keep.
    pub fn set_max_affected_targets(&mut self, max: u32) {
        self.max_affected_targets = Some(max);
    }

    /// Biases target selection for one effect slot.
    pub fn set_filtering_scheme(&mut self, effect: crate::ids::EffectIndex, scheme: TargetScheme) {
        self.filtering = Some((effect, scheme));
    }

    /// Queues an engine command from a hook.
    pub fn push_command(&mut self, command: EngineCommand) {
        self.commands.push(command);
    }
}
