//! Proc evaluation context and results.
//!
//! A proc is an event-triggered evaluation (typically on incoming damage)
//! that may fire a secondary effect. The [`ProcContext`] exists only for
//! the duration of one evaluation and carries both the triggering event
//! and the out-parameters a script may set.

use crate::command::{CommandBuf, EngineCommand};
use crate::ids::{EntityId, MAX_SPELL_EFFECTS, SpellId};

/// Who a script-triggered proc spell is aimed at.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TriggerTarget {
    /// The attacking entity (engine default).
    #[default]
    Attacker,
    /// The aura holder itself.
    SelfCast,
}

/// Result of one proc evaluation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ProcResult {
    /// The proc fired; the engine runs its default trigger handling.
    Ok,
    /// The proc did not fire (condition unmet, wrong geometry).
    Failed,
    /// The proc was evaluated but deliberately absorbed: the engine must
    /// not run its default trigger. Used to silently consume incoming
    /// damage until a budget is exhausted.
    CantTrigger,
}

/// Transient context passed to `on_check_proc` / `on_proc`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProcContext {
    /// Entity whose action triggered the evaluation.
    pub attacker: EntityId,
    /// Entity holding the aura being evaluated.
    pub victim: EntityId,
    /// Incoming damage magnitude of the triggering event.
    pub damage: i64,
    /// Deterministic seed for this evaluation's random rolls.
    pub seed: u64,

    /// Out: spell the engine should trigger instead of the template default.
    pub triggered_spell: Option<SpellId>,
    /// Out: target override for the triggered spell.
    pub trigger_target: TriggerTarget,
    /// Out: base-point overrides for the triggered spell's effect slots.
    pub basepoints: [Option<i64>; MAX_SPELL_EFFECTS],

    /// Commands queued by the proc hook (counterattacks, aura removal).
    pub commands: CommandBuf,
}

impl ProcContext {
    /// Creates a context for damage dealt by `attacker` to `victim`.
    pub fn new(attacker: EntityId, victim: EntityId, damage: i64) -> Self {
        Self {
            attacker,
            victim,
            damage,
            ..Self::default()
        }
    }

    /// Sets the deterministic seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Queues an engine command from a proc hook.
    pub fn push_command(&mut self, command: EngineCommand) {
        self.commands.push(command);
    }
}
