//! End-to-end run of the Motivate-a-Tron escort through the dispatcher.
//!
//! Exercises the whole chain a host engine would drive: registration,
//! the entry cast on the citizen, the escort aura's application, the
//! periodic ticks while following, completion at the destination, and
//! the removal teardown.

use std::collections::HashMap;

use script_content::ids::{
    NPC_CAPTAIN_TREAD, NPC_GNOME_CITIZEN, NPC_MOTIVATED_CITIZEN, QUEST_MOTIVATE_A_TRON,
    SPELL_BLOOD_RESERVE, SPELL_MOTIVATE, SPELL_MOTIVATE_COMPLETE, SPELL_MOTIVATE_FLAVOR,
    SPELL_MOTIVATED,
};
use script_content::register_scripts;
use script_core::{
    AuraInstance, BehaviorRegistry, CastContext, CreatureEntry, EffectIndex, EngineCommand,
    EntityId, Env, EscortPhase, MotionOracle, MovementKind, ProcContext, ProcResult, QuestId,
    QuestOracle, RngOracle, ScriptConfig, ScriptDispatcher, ScriptEnv, ScriptSlot, SpellId,
    WorldOracle,
};

const PLAYER: EntityId = EntityId(1);
const CITIZEN: EntityId = EntityId(50);
const TREAD: EntityId = EntityId(70);

struct TestWorld {
    entries: HashMap<EntityId, CreatureEntry>,
    destination_in_range: bool,
}

impl TestWorld {
    fn new() -> Self {
        Self {
            entries: [(CITIZEN, NPC_GNOME_CITIZEN), (TREAD, NPC_CAPTAIN_TREAD)].into(),
            destination_in_range: false,
        }
    }
}

impl WorldOracle for TestWorld {
    fn is_player(&self, entity: EntityId) -> bool {
        entity == PLAYER
    }

    fn entry(&self, entity: EntityId) -> Option<CreatureEntry> {
        self.entries.get(&entity).copied()
    }

    fn level(&self, _entity: EntityId) -> Option<u32> {
        Some(80)
    }

    fn max_health(&self, _entity: EntityId) -> Option<u32> {
        Some(8000)
    }

    fn health_percent(&self, _entity: EntityId) -> Option<f32> {
        Some(100.0)
    }

    fn is_facing_back(&self, _unit: EntityId, _other: EntityId) -> bool {
        false
    }

    fn creatures_in_radius(
        &self,
        _origin: EntityId,
        entry: CreatureEntry,
        _radius: f32,
    ) -> Vec<EntityId> {
        if self.destination_in_range && entry == NPC_CAPTAIN_TREAD {
            vec![TREAD]
        } else {
            Vec::new()
        }
    }
}

struct TestQuests(bool);

impl QuestOracle for TestQuests {
    fn status(&self, player: EntityId, quest: QuestId) -> script_core::QuestStatus {
        if self.0 && player == PLAYER && quest == QUEST_MOTIVATE_A_TRON {
            script_core::QuestStatus::InProgress
        } else {
            script_core::QuestStatus::NotStarted
        }
    }
}

struct TestMotion(MovementKind);

impl MotionOracle for TestMotion {
    fn current_movement(&self, _unit: EntityId) -> MovementKind {
        self.0
    }
}

struct TestRng(u32);

impl RngOracle for TestRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

fn registry() -> BehaviorRegistry {
    let mut builder = BehaviorRegistry::builder();
    register_scripts(&mut builder, &ScriptConfig::default()).expect("registration");
    builder.build()
}

#[test]
fn escort_runs_from_cast_to_completion() {
    let registry = registry();
    let dispatcher = ScriptDispatcher::new(&registry);

    // The entry cast: a player zaps the idle citizen.
    let world = TestWorld::new();
    let rng = TestRng(50); // 50 % 100 = 50: no cosmetic branch at the default 10%
    let env: ScriptEnv<'_> = Env::new(Some(&world), None, None, None, None, Some(&rng));

    let mut cast = CastContext::new(PLAYER, SPELL_MOTIVATE)
        .with_unit_target(CITIZEN)
        .with_seed(7);
    assert!(dispatcher.check_cast(&cast, &env, true).is_ok());
    dispatcher.effect_execute(&mut cast, &env, EffectIndex::First);

    // The escort kicks off: re-template, self-cast of the escort aura,
    // follow order, quest credit for the zap itself.
    assert!(cast.commands.iter().any(|c| matches!(
        c,
        EngineCommand::CastSpell {
            caster: CITIZEN,
            spell: SPELL_MOTIVATED,
            ..
        }
    )));
    assert!(cast.commands.iter().any(|c| matches!(
        c,
        EngineCommand::FollowUnit {
            follower: CITIZEN,
            target: PLAYER,
            ..
        }
    )));
    assert!(cast.commands.iter().any(|c| matches!(
        c,
        EngineCommand::GrantKillCredit {
            player: PLAYER,
            entry: NPC_GNOME_CITIZEN,
        }
    )));

    // The host executes the self-cast; the aura attaches to the citizen.
    let mut aura = AuraInstance::new(SPELL_MOTIVATED, EffectIndex::First, CITIZEN, CITIZEN);
    let applied = dispatcher.aura_applied(&mut aura, &env);

    assert_eq!(aura.forced_period_ms, Some(1000));
    assert_eq!(aura.slot, ScriptSlot::Escort(EscortPhase::Following));
    assert!(applied.iter().any(|c| matches!(
        c,
        EngineCommand::CastSpell {
            spell: SPELL_MOTIVATE_FLAVOR,
            ..
        }
    )));

    // A few healthy ticks: following, quest active, destination far.
    let quests = TestQuests(true);
    let motion = TestMotion(MovementKind::Follow { target: PLAYER });
    let env: ScriptEnv<'_> =
        Env::new(Some(&world), None, None, Some(&quests), Some(&motion), None);
    for _ in 0..3 {
        let out = dispatcher.periodic_tick_end(&mut aura, &env);
        assert!(out.is_empty());
        assert_eq!(aura.slot, ScriptSlot::Escort(EscortPhase::Following));
    }

    // The destination creature comes into range.
    let mut world = TestWorld::new();
    world.destination_in_range = true;
    let env: ScriptEnv<'_> =
        Env::new(Some(&world), None, None, Some(&quests), Some(&motion), None);
    let out = dispatcher.periodic_tick_end(&mut aura, &env);

    assert_eq!(aura.slot, ScriptSlot::Escort(EscortPhase::Completing));
    let credits = out
        .iter()
        .filter(|c| {
            matches!(
                c,
                EngineCommand::GrantKillCredit {
                    player: PLAYER,
                    entry: NPC_MOTIVATED_CITIZEN,
                }
            )
        })
        .count();
    assert_eq!(credits, 1);
    assert!(out.iter().any(|c| matches!(
        c,
        EngineCommand::CastSpell {
            caster: CITIZEN,
            spell: SPELL_MOTIVATE_COMPLETE,
            ..
        }
    )));
    assert!(out.contains(&EngineCommand::RemoveAura {
        unit: CITIZEN,
        spell: SPELL_MOTIVATED,
    }));
    assert!(out.contains(&EngineCommand::SetRespawnDelay {
        unit: CITIZEN,
        delay_ms: 1000,
    }));
    assert!(out.contains(&EngineCommand::DespawnAfter {
        unit: CITIZEN,
        delay_ms: 2000,
    }));

    // A stray tick before the removal lands issues nothing further.
    let out = dispatcher.periodic_tick_end(&mut aura, &env);
    assert!(out.is_empty());

    // The host executes the RemoveAura command.
    let removed = dispatcher.aura_removed(&mut aura, &env);
    assert_eq!(aura.slot, ScriptSlot::Escort(EscortPhase::Removed));
    assert!(removed.contains(&EngineCommand::IdleMovement { unit: CITIZEN }));
    assert!(removed.contains(&EngineCommand::DespawnAfter {
        unit: CITIZEN,
        delay_ms: 5000,
    }));
}

#[test]
fn abandoning_the_quest_aborts_without_credit() {
    let registry = registry();
    let dispatcher = ScriptDispatcher::new(&registry);

    let world = TestWorld::new();
    let rng = TestRng(50);
    let env: ScriptEnv<'_> = Env::new(Some(&world), None, None, None, None, Some(&rng));

    let mut aura = AuraInstance::new(SPELL_MOTIVATED, EffectIndex::First, CITIZEN, CITIZEN);
    dispatcher.aura_applied(&mut aura, &env);

    // The player drops the quest mid-escort.
    let quests = TestQuests(false);
    let motion = TestMotion(MovementKind::Follow { target: PLAYER });
    let env: ScriptEnv<'_> =
        Env::new(Some(&world), None, None, Some(&quests), Some(&motion), None);
    let out = dispatcher.periodic_tick_end(&mut aura, &env);

    assert_eq!(aura.slot, ScriptSlot::Escort(EscortPhase::Completing));
    assert!(!out
        .iter()
        .any(|c| matches!(c, EngineCommand::GrantKillCredit { .. })));
    assert!(!out.iter().any(|c| matches!(
        c,
        EngineCommand::CastSpell {
            spell: SPELL_MOTIVATE_COMPLETE,
            ..
        }
    )));
    assert!(out.contains(&EngineCommand::RemoveAura {
        unit: CITIZEN,
        spell: SPELL_MOTIVATED,
    }));
}

#[test]
fn cosmetic_branch_never_reaches_the_aura() {
    let registry = registry();
    let dispatcher = ScriptDispatcher::new(&registry);

    let world = TestWorld::new();
    let rng = TestRng(3); // 3 < 10: cosmetic branch
    let env: ScriptEnv<'_> = Env::new(Some(&world), None, None, None, None, Some(&rng));

    let mut cast = CastContext::new(PLAYER, SPELL_MOTIVATE)
        .with_unit_target(CITIZEN)
        .with_seed(7);
    dispatcher.effect_execute(&mut cast, &env, EffectIndex::First);

    assert_eq!(cast.commands.len(), 1);
    assert!(!cast.commands.iter().any(|c| matches!(
        c,
        EngineCommand::CastSpell {
            spell: SPELL_MOTIVATED,
            ..
        }
    )));
    assert!(!cast
        .commands
        .iter()
        .any(|c| matches!(c, EngineCommand::FollowUnit { .. })));
}

#[test]
fn proc_gate_composes_through_the_dispatcher() {
    let registry = registry();
    let dispatcher = ScriptDispatcher::new(&registry);

    // Blood Reserve at full health: the gate fails and nothing mutates.
    let world = TestWorld::new();
    let env: ScriptEnv<'_> = Env::new(Some(&world), None, None, None, None, None);

    let mut aura =
        AuraInstance::new(SPELL_BLOOD_RESERVE, EffectIndex::First, PLAYER, PLAYER).with_stacks(3);
    let mut proc = ProcContext::new(EntityId(9), PLAYER, 500);

    let result = dispatcher.evaluate_proc(&mut aura, &mut proc, &env);

    assert_eq!(result, ProcResult::Failed);
    assert!(proc.triggered_spell.is_none());
    assert!(proc.commands.is_empty());
}

#[test]
fn unscripted_spells_pass_straight_through() {
    let registry = registry();
    let dispatcher = ScriptDispatcher::new(&registry);

    let cast = CastContext::new(PLAYER, SpellId(999_999));
    assert!(dispatcher
        .check_cast(&cast, &ScriptEnv::empty(), true)
        .is_ok());

    let mut aura =
        AuraInstance::new(SpellId(999_999), EffectIndex::First, PLAYER, PLAYER);
    let out = dispatcher.aura_applied(&mut aura, &ScriptEnv::empty());
    assert!(out.is_empty());
}
