//! Traits describing the engine services scripts may consume.
//!
//! Oracles expose live world state, balance tables, spell templates, quest
//! progress, movement state, and deterministic randomness. The [`Env`]
//! aggregate bundles them so a script can reach everything it needs without
//! hard coupling to concrete engine implementations: tests plug in stubs,
//! the host plugs in its real subsystems.

mod error;
mod motion;
mod quests;
mod rng;
mod spells;
mod stats;
mod world;

pub use error::OracleError;
pub use motion::{MotionOracle, MovementKind};
pub use quests::{QuestOracle, QuestStatus};
pub use rng::{PcgRng, RngOracle, mix_seed};
pub use spells::SpellOracle;
pub use stats::{ClassLevelStats, ContentTier, CreatureClass, CreatureStatsOracle};
pub use world::WorldOracle;

/// Aggregates the read-only oracles scripts query during hook execution.
///
/// Every slot is optional: hosts wire up only the services they have, and
/// scripts degrade defensively when a slot is absent (a missing stats
/// oracle yields a zero damage threshold, a missing motion oracle ends an
/// escort). Accessors return a typed [`OracleError`] for hosts that want
/// to assert on their environment instead.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, W, S, P, Q, M, R>
where
    W: WorldOracle + ?Sized,
    S: CreatureStatsOracle + ?Sized,
    P: SpellOracle + ?Sized,
    Q: QuestOracle + ?Sized,
    M: MotionOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    world: Option<&'a W>,
    stats: Option<&'a S>,
    spells: Option<&'a P>,
    quests: Option<&'a Q>,
    motion: Option<&'a M>,
    rng: Option<&'a R>,
}

/// The trait-object form every hook signature uses.
pub type ScriptEnv<'a> = Env<
    'a,
    dyn WorldOracle + 'a,
    dyn CreatureStatsOracle + 'a,
    dyn SpellOracle + 'a,
    dyn QuestOracle + 'a,
    dyn MotionOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, W, S, P, Q, M, R> Env<'a, W, S, P, Q, M, R>
where
    W: WorldOracle + ?Sized,
    S: CreatureStatsOracle + ?Sized,
    P: SpellOracle + ?Sized,
    Q: QuestOracle + ?Sized,
    M: MotionOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        world: Option<&'a W>,
        stats: Option<&'a S>,
        spells: Option<&'a P>,
        quests: Option<&'a Q>,
        motion: Option<&'a M>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            world,
            stats,
            spells,
            quests,
            motion,
            rng,
        }
    }

    pub fn with_all(
        world: &'a W,
        stats: &'a S,
        spells: &'a P,
        quests: &'a Q,
        motion: &'a M,
        rng: &'a R,
    ) -> Self {
        Self::new(
            Some(world),
            Some(stats),
            Some(spells),
            Some(quests),
            Some(motion),
            Some(rng),
        )
    }

    pub fn empty() -> Self {
        Self {
            world: None,
            stats: None,
            spells: None,
            quests: None,
            motion: None,
            rng: None,
        }
    }

    /// Returns the WorldOracle, or an error if not available.
    pub fn world(&self) -> Result<&'a W, OracleError> {
        self.world.ok_or(OracleError::WorldNotAvailable)
    }

    /// Returns the CreatureStatsOracle, or an error if not available.
    pub fn stats(&self) -> Result<&'a S, OracleError> {
        self.stats.ok_or(OracleError::StatsNotAvailable)
    }

    /// Returns the SpellOracle, or an error if not available.
    pub fn spells(&self) -> Result<&'a P, OracleError> {
        self.spells.ok_or(OracleError::SpellsNotAvailable)
    }

    /// Returns the QuestOracle, or an error if not available.
    pub fn quests(&self) -> Result<&'a Q, OracleError> {
        self.quests.ok_or(OracleError::QuestsNotAvailable)
    }

    /// Returns the MotionOracle, or an error if not available.
    pub fn motion(&self) -> Result<&'a M, OracleError> {
        self.motion.ok_or(OracleError::MotionNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}
