//! Motivate: the escort entry cast.
//!
//! A player zaps an idle citizen: usually the citizen is re-templated into
//! its motivated variant, starts trailing the player, and the player gets
//! quest credit. A small configurable fraction of casts instead turns the
//! citizen into a rabbit and ends there.

use script_core::{
    CastContext, CastFailure, CastFlags, CastResult, EffectIndex, EngineCommand, ScriptConfig,
    ScriptEnv, SpellScript, mix_seed,
};

use crate::ids::{
    DISPLAY_GNOME_CITIZEN, NPC_GNOME_CITIZEN, NPC_MOTIVATED_CITIZEN, SPELL_MOTIVATED,
    SPELL_RABBIT_TRANSFORM,
};

/// Sub-seed contexts for the independent rolls of one cast.
const ROLL_BRANCH: u32 = 0;
const ROLL_DISTANCE: u32 = 1;
const ROLL_ANGLE: u32 = 2;

pub struct Motivate {
    config: ScriptConfig,
}

impl Motivate {
    pub fn new(config: &ScriptConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl SpellScript for Motivate {
    fn name(&self) -> &'static str {
        "motivate"
    }

    fn on_check_cast(
        &self,
        cast: &CastContext,
        env: &ScriptEnv<'_>,
        _strict: bool,
    ) -> CastResult {
        let entry = cast
            .unit_target
            .and_then(|target| env.world().ok().and_then(|w| w.entry(target)));

        if entry != Some(NPC_GNOME_CITIZEN) {
            return CastResult::Failed(CastFailure::BadTargets);
        }
        CastResult::Ok
    }

    fn on_effect_execute(
        &self,
        cast: &mut CastContext,
        env: &ScriptEnv<'_>,
        _effect: EffectIndex,
    ) {
        let Some(target) = cast.unit_target else { return };
        let Ok(world) = env.world() else { return };
        let Ok(rng) = env.rng() else { return };

        // Only players drive the quest chain.
        if !world.is_player(cast.caster) {
            return;
        }

        let caster = cast.caster;

        if rng.roll_chance_percent(
            mix_seed(cast.seed, ROLL_BRANCH),
            self.config.cosmetic_branch_chance,
        ) {
            // Cosmetic dead end: rabbit, no escort, no credit.
            cast.push_command(EngineCommand::CastSpell {
                caster,
                target: Some(target),
                spell: SPELL_RABBIT_TRANSFORM,
                flags: CastFlags::empty(),
            });
            return;
        }

        let distance = rng.range_f32(
            mix_seed(cast.seed, ROLL_DISTANCE),
            self.config.follow_distance_min,
            self.config.follow_distance_max,
        );
        let angle = rng.range_f32(
            mix_seed(cast.seed, ROLL_ANGLE),
            self.config.follow_angle_min,
            self.config.follow_angle_max,
        );

        cast.push_command(EngineCommand::TransformEntry {
            unit: target,
            entry: NPC_MOTIVATED_CITIZEN,
        });
        // Keep the citizen's model through the re-template.
        cast.push_command(EngineCommand::SetDisplay {
            unit: target,
            display: DISPLAY_GNOME_CITIZEN,
        });
        cast.push_command(EngineCommand::CastSpell {
            caster: target,
            target: None,
            spell: SPELL_MOTIVATED,
            flags: CastFlags::empty(),
        });
        cast.push_command(EngineCommand::FollowUnit {
            follower: target,
            target: caster,
            distance,
            angle,
        });
        cast.push_command(EngineCommand::GrantKillCredit {
            player: caster,
            entry: NPC_GNOME_CITIZEN,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SPELL_MOTIVATE;
    use crate::scripts::testutil::{FixedRng, StubWorld};
    use script_core::{CreatureEntry, EntityId, Env, ScriptEnv};

    const PLAYER: EntityId = EntityId(1);
    const CITIZEN: EntityId = EntityId(50);

    fn world() -> StubWorld {
        StubWorld {
            players: vec![PLAYER],
            entries: [(CITIZEN, NPC_GNOME_CITIZEN)].into(),
            ..StubWorld::default()
        }
    }

    fn cast() -> CastContext {
        CastContext::new(PLAYER, SPELL_MOTIVATE)
            .with_unit_target(CITIZEN)
            .with_seed(99)
    }

    fn script() -> Motivate {
        Motivate::new(&ScriptConfig::default())
    }

    #[test]
    fn rejects_anything_but_the_citizen() {
        let mut world = world();
        world.entries.insert(EntityId(60), CreatureEntry(12345));
        let env: ScriptEnv<'_> = Env::new(Some(&world), None, None, None, None, None);

        let wrong = CastContext::new(PLAYER, SPELL_MOTIVATE).with_unit_target(EntityId(60));
        assert_eq!(
            script().on_check_cast(&wrong, &env, false),
            CastResult::Failed(CastFailure::BadTargets)
        );

        let none = CastContext::new(PLAYER, SPELL_MOTIVATE);
        assert_eq!(
            script().on_check_cast(&none, &env, false),
            CastResult::Failed(CastFailure::BadTargets)
        );

        assert_eq!(script().on_check_cast(&cast(), &env, false), CastResult::Ok);
    }

    #[test]
    fn normal_branch_starts_the_escort() {
        let world = world();
        let rng = FixedRng(50); // 50 % 100 = 50 >= 10: no cosmetic branch
        let env: ScriptEnv<'_> = Env::new(Some(&world), None, None, None, None, Some(&rng));
        let mut cast = cast();

        script().on_effect_execute(&mut cast, &env, EffectIndex::First);

        assert_eq!(cast.commands.len(), 5);
        assert_eq!(
            cast.commands[0],
            EngineCommand::TransformEntry {
                unit: CITIZEN,
                entry: NPC_MOTIVATED_CITIZEN,
            }
        );
        assert!(matches!(
            cast.commands[2],
            EngineCommand::CastSpell {
                caster: CITIZEN,
                target: None,
                spell: SPELL_MOTIVATED,
                ..
            }
        ));
        let EngineCommand::FollowUnit {
            follower,
            target,
            distance,
            angle,
        } = cast.commands[3].clone()
        else {
            panic!("expected follow command, got {:?}", cast.commands[3]);
        };
        assert_eq!(follower, CITIZEN);
        assert_eq!(target, PLAYER);
        assert!((0.5..3.0).contains(&distance));
        assert!((core::f32::consts::PI * 0.8..core::f32::consts::PI * 1.2).contains(&angle));
        assert_eq!(
            cast.commands[4],
            EngineCommand::GrantKillCredit {
                player: PLAYER,
                entry: NPC_GNOME_CITIZEN,
            }
        );
    }

    #[test]
    fn cosmetic_branch_is_a_dead_end() {
        let world = world();
        let rng = FixedRng(3); // 3 < 10: cosmetic branch
        let env: ScriptEnv<'_> = Env::new(Some(&world), None, None, None, None, Some(&rng));
        let mut cast = cast();

        script().on_effect_execute(&mut cast, &env, EffectIndex::First);

        assert_eq!(
            cast.commands.as_slice(),
            [EngineCommand::CastSpell {
                caster: PLAYER,
                target: Some(CITIZEN),
                spell: SPELL_RABBIT_TRANSFORM,
                flags: CastFlags::empty(),
            }]
        );
    }

    #[test]
    fn creature_casters_do_nothing() {
        let mut world = world();
        world.players.clear();
        let rng = FixedRng(50);
        let env: ScriptEnv<'_> = Env::new(Some(&world), None, None, None, None, Some(&rng));
        let mut cast = cast();

        script().on_effect_execute(&mut cast, &env, EffectIndex::First);
        assert!(cast.commands.is_empty());
    }

    #[test]
    fn branch_chance_is_configurable() {
        let world = world();
        let rng = FixedRng(3);
        let env: ScriptEnv<'_> = Env::new(Some(&world), None, None, None, None, Some(&rng));

        let config = ScriptConfig {
            cosmetic_branch_chance: 0,
            ..ScriptConfig::default()
        };
        let mut cast = cast();
        Motivate::new(&config).on_effect_execute(&mut cast, &env, EffectIndex::First);

        // Chance zero: the roll that would have been a rabbit starts the
        // escort instead.
        assert_eq!(cast.commands.len(), 5);
    }
}
