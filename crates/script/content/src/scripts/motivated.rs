//! Motivated: the escort aura driving the citizen once per second.
//!
//! The decision logic lives in `script_core::escort`; this script samples
//! the oracles into an [`EscortTick`], advances the machine, and maps the
//! resulting actions onto engine commands. The aura sits on the citizen
//! (it casts the aura on itself at escort start), so the instance's caster
//! and target are both the citizen.

use script_core::{
    AuraInstance, AuraScript, CastFlags, CommandBuf, EngineCommand, EntityId, EscortAction,
    EscortPhase, EscortTick, MovementKind, QuestStatus, ScriptConfig, ScriptEnv, ScriptSlot,
    escort,
};

use crate::ids::{
    NPC_CAPTAIN_TREAD, NPC_MOTIVATED_CITIZEN, QUEST_MOTIVATE_A_TRON, SPELL_MOTIVATE_COMPLETE,
    SPELL_MOTIVATE_FLAVOR,
};

pub struct Motivated {
    config: ScriptConfig,
}

impl Motivated {
    pub fn new(config: &ScriptConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// The player the citizen is currently following, if the follow order
    /// is intact and its target is still a live player.
    fn followed_player(&self, citizen: EntityId, env: &ScriptEnv<'_>) -> Option<EntityId> {
        let MovementKind::Follow { target } = env.motion().ok()?.current_movement(citizen) else {
            return None;
        };
        let world = env.world().ok()?;
        world.is_player(target).then_some(target)
    }

    fn run_actions(
        &self,
        actions: &[EscortAction],
        citizen: EntityId,
        player: Option<EntityId>,
        aura: &AuraInstance,
        out: &mut CommandBuf,
    ) {
        for action in actions {
            match action {
                EscortAction::GrantCredit => {
                    if let Some(player) = player {
                        out.push(EngineCommand::GrantKillCredit {
                            player,
                            entry: NPC_MOTIVATED_CITIZEN,
                        });
                    }
                }
                EscortAction::FireCompletionCast => out.push(EngineCommand::CastSpell {
                    caster: citizen,
                    target: None,
                    spell: SPELL_MOTIVATE_COMPLETE,
                    flags: CastFlags::empty(),
                }),
                EscortAction::HaltMovement => {
                    out.push(EngineCommand::IdleMovement { unit: citizen });
                    out.push(EngineCommand::StopMovement { unit: citizen });
                }
                EscortAction::RemoveAura => out.push(EngineCommand::RemoveAura {
                    unit: citizen,
                    spell: aura.spell,
                }),
                EscortAction::SetRespawnDelay => out.push(EngineCommand::SetRespawnDelay {
                    unit: citizen,
                    delay_ms: self.config.respawn_delay_ms,
                }),
                EscortAction::ScheduleDespawn => out.push(EngineCommand::DespawnAfter {
                    unit: citizen,
                    delay_ms: self.config.completion_despawn_ms,
                }),
            }
        }
    }
}

impl AuraScript for Motivated {
    fn name(&self) -> &'static str {
        "motivated"
    }

    fn on_apply(
        &self,
        aura: &mut AuraInstance,
        _env: &ScriptEnv<'_>,
        applying: bool,
        out: &mut CommandBuf,
    ) {
        let citizen = aura.caster;

        if applying {
            aura.force_periodicity(self.config.escort_tick_ms);
            aura.slot = ScriptSlot::Escort(escort::begin(EscortPhase::Idle));
            // Start dialogue.
            out.push(EngineCommand::CastSpell {
                caster: citizen,
                target: None,
                spell: SPELL_MOTIVATE_FLAVOR,
                flags: CastFlags::empty(),
            });
        } else {
            // Final teardown, also covers dispel and stack replacement:
            // drop the follow order and cycle the creature out so a fresh
            // citizen can respawn.
            out.push(EngineCommand::IdleMovement { unit: citizen });
            out.push(EngineCommand::SetRespawnDelay {
                unit: citizen,
                delay_ms: self.config.respawn_delay_ms,
            });
            out.push(EngineCommand::DespawnAfter {
                unit: citizen,
                delay_ms: self.config.removal_despawn_ms,
            });
            let phase = match aura.slot {
                ScriptSlot::Escort(phase) => phase,
                _ => EscortPhase::Idle,
            };
            aura.slot = ScriptSlot::Escort(escort::finish(phase));
        }
    }

    fn on_periodic_tick_end(
        &self,
        aura: &mut AuraInstance,
        env: &ScriptEnv<'_>,
        out: &mut CommandBuf,
    ) {
        let ScriptSlot::Escort(phase) = aura.slot else {
            return;
        };
        let citizen = aura.caster;

        let player = self.followed_player(citizen, env);
        let quest_active = player.is_some_and(|p| {
            env.quests()
                .map(|q| q.status(p, QUEST_MOTIVATE_A_TRON) != QuestStatus::NotStarted)
                .unwrap_or(false)
        });
        let destination_found = player.is_some()
            && env.world().is_ok_and(|w| {
                !w.creatures_in_radius(citizen, NPC_CAPTAIN_TREAD, self.config.destination_radius)
                    .is_empty()
            });

        let tick = EscortTick {
            follow_ok: player.is_some(),
            quest_active,
            destination_found,
        };
        let (next, actions) = escort::advance(phase, tick);
        aura.slot = ScriptSlot::Escort(next);

        self.run_actions(&actions, citizen, player, aura, out);
    }
}
