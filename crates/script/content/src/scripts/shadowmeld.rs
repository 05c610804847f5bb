//! Shadowmeld: vanish from combat where the caster is the only threat.

use script_core::{CastContext, CastFlags, EngineCommand, ScriptEnv, SpellScript};

use crate::ids::SPELL_SHADOWMELD_TRIGGER;

/// Fires the stealth-flavor trigger, then drops the caster off the threat
/// list of every enemy that has nobody else to fight.
pub struct Shadowmeld;

impl SpellScript for Shadowmeld {
    fn name(&self) -> &'static str {
        "shadowmeld"
    }

    fn on_cast(&self, cast: &mut CastContext, env: &ScriptEnv<'_>) {
        let caster = cast.caster;
        cast.push_command(EngineCommand::CastSpell {
            caster,
            target: None,
            spell: SPELL_SHADOWMELD_TRIGGER,
            flags: CastFlags::TRIGGERED,
        });

        let Ok(world) = env.world() else { return };
        for enemy in world.sole_threat_attackers(caster) {
            // -101 percent clears the reference entirely.
            cast.push_command(EngineCommand::ModifyThreatPercent {
                enemy,
                unit: caster,
                percent: -101,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SPELL_SHADOWMELD;
    use crate::scripts::testutil::StubWorld;
    use script_core::{EntityId, Env, ScriptEnv};

    #[test]
    fn drops_threat_only_for_sole_threat_enemies() {
        let world = StubWorld {
            sole_threat: vec![EntityId(7), EntityId(8)],
            ..StubWorld::default()
        };
        let env: ScriptEnv<'_> = Env::new(Some(&world), None, None, None, None, None);
        let mut cast = CastContext::new(EntityId(1), SPELL_SHADOWMELD);

        Shadowmeld.on_cast(&mut cast, &env);

        assert_eq!(cast.commands.len(), 3);
        assert!(matches!(
            cast.commands[0],
            EngineCommand::CastSpell {
                spell: SPELL_SHADOWMELD_TRIGGER,
                ..
            }
        ));
        assert_eq!(
            cast.commands[1],
            EngineCommand::ModifyThreatPercent {
                enemy: EntityId(7),
                unit: EntityId(1),
                percent: -101,
            }
        );
    }

    #[test]
    fn trigger_fires_even_without_world_oracle() {
        let env = ScriptEnv::empty();
        let mut cast = CastContext::new(EntityId(1), SPELL_SHADOWMELD);
        Shadowmeld.on_cast(&mut cast, &env);
        assert_eq!(cast.commands.len(), 1);
    }
}
