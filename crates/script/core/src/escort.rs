//! Escort state machine for follow-and-deliver behaviors.
//!
//! The decision logic is a pure transition function over an enumerated
//! phase: the caller samples world state into an [`EscortTick`], calls
//! [`advance`], and executes the returned actions through engine commands.
//! Keeping the side effects out of the transition makes every exit path
//! testable without a world.
//!
//! Phase diagram:
//!
//! ```text
//! Idle ──begin()──▶ Following ──tick──▶ Completing ──removal──▶ Removed
//!                      │  ▲
//!                      └──┘ (destination not found, follow intact)
//! ```
//!
//! `Completing` and `Removed` are terminal for the decision logic: a
//! completed escort never re-enters `Following`, and repeated ticks in
//! `Completing` emit no further actions (no double credit).

use arrayvec::ArrayVec;

/// Phase of one escort lifecycle.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EscortPhase {
    /// No escort aura is attached.
    #[default]
    Idle,
    /// Aura applied, ticking, creature follows its player.
    Following,
    /// A termination condition fired this tick; removal is scheduled.
    Completing,
    /// Aura removed, creature scheduled out of the world. Terminal.
    Removed,
}

/// World observations for one periodic tick, sampled by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EscortTick {
    /// The top movement generator is a follow order whose target is still
    /// a live player. False covers every inconsistent case: no generator,
    /// non-follow generator, despawned or non-player target.
    pub follow_ok: bool,
    /// The followed player's tracked quest is still underway.
    pub quest_active: bool,
    /// A destination creature was found within the search radius.
    pub destination_found: bool,
}

/// Engine-side steps requested by a transition, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum EscortAction {
    /// Grant the followed player quest credit. Emitted at most once per
    /// escort lifecycle.
    GrantCredit,
    /// Fire the cosmetic completion cast (dialogue trigger).
    FireCompletionCast,
    /// Halt the creature's movement immediately.
    HaltMovement,
    /// Remove the escort aura from the creature.
    RemoveAura,
    /// Set the creature's respawn delay.
    SetRespawnDelay,
    /// Schedule the creature's removal from the world.
    ScheduleDespawn,
}

/// Bounded action list of one transition.
pub type EscortActions = ArrayVec<EscortAction, 6>;

/// Enters `Following` from `Idle` on aura application.
///
/// Any other starting phase is left unchanged; re-applying over a live
/// escort is an engine-side stacking decision, not a machine transition.
pub fn begin(phase: EscortPhase) -> EscortPhase {
    match phase {
        EscortPhase::Idle => EscortPhase::Following,
        other => other,
    }
}

/// Advances the machine by one periodic tick.
///
/// Returns the next phase and the actions the caller must execute. The
/// abort path (broken follow, quest gone) and the success path
/// (destination reached) both end in `Completing`; the success path is the
/// only one that grants credit, and only on the tick that enters
/// `Completing`.
pub fn advance(phase: EscortPhase, tick: EscortTick) -> (EscortPhase, EscortActions) {
    let mut actions = EscortActions::new();

    match phase {
        EscortPhase::Following if !tick.follow_ok || !tick.quest_active => {
            actions.push(EscortAction::RemoveAura);
            actions.push(EscortAction::SetRespawnDelay);
            actions.push(EscortAction::ScheduleDespawn);
            (EscortPhase::Completing, actions)
        }
        EscortPhase::Following if tick.destination_found => {
            actions.push(EscortAction::GrantCredit);
            actions.push(EscortAction::FireCompletionCast);
            actions.push(EscortAction::HaltMovement);
            actions.push(EscortAction::RemoveAura);
            actions.push(EscortAction::SetRespawnDelay);
            actions.push(EscortAction::ScheduleDespawn);
            (EscortPhase::Completing, actions)
        }
        // Still following, nothing to do this tick.
        EscortPhase::Following => (EscortPhase::Following, actions),
        // Idle never ticks; Completing/Removed are inert.
        other => (other, actions),
    }
}

/// Marks the machine terminal on aura removal.
///
/// Idempotent: removal of an already-removed escort stays `Removed`.
pub fn finish(_phase: EscortPhase) -> EscortPhase {
    EscortPhase::Removed
}
