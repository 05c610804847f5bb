//! Oracle access errors.

use crate::error::{ErrorSeverity, ScriptError};

/// Errors that occur when accessing oracle services.
///
/// A missing oracle means the host engine did not wire up a service the
/// script needs. Scripts themselves degrade defensively (zero threshold,
/// abort-path escort tick); hosts asserting on the environment get a typed
/// error instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// WorldOracle is not available in the environment.
    #[error("WorldOracle not available")]
    WorldNotAvailable,

    /// CreatureStatsOracle is not available in the environment.
    #[error("CreatureStatsOracle not available")]
    StatsNotAvailable,

    /// SpellOracle is not available in the environment.
    #[error("SpellOracle not available")]
    SpellsNotAvailable,

    /// QuestOracle is not available in the environment.
    #[error("QuestOracle not available")]
    QuestsNotAvailable,

    /// MotionOracle is not available in the environment.
    #[error("MotionOracle not available")]
    MotionNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,
}

impl ScriptError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            WorldNotAvailable => "ORACLE_WORLD_NOT_AVAILABLE",
            StatsNotAvailable => "ORACLE_STATS_NOT_AVAILABLE",
            SpellsNotAvailable => "ORACLE_SPELLS_NOT_AVAILABLE",
            QuestsNotAvailable => "ORACLE_QUESTS_NOT_AVAILABLE",
            MotionNotAvailable => "ORACLE_MOTION_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}
