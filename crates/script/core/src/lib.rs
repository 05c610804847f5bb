//! Hook-dispatch framework for spell and aura behavior scripts.
//!
//! `script-core` defines the extension-point contract a combat engine uses
//! to let per-spell behavior modules intercept moments of a cast's and an
//! aura's lifecycle: registration ([`BehaviorRegistry`]), the capability
//! traits ([`SpellScript`], [`AuraScript`]), engine-facing dispatch with
//! ordering guarantees ([`ScriptDispatcher`]), the oracle boundary to the
//! host engine ([`env`]), per-instance scratch state ([`ScriptSlot`]), and
//! the escort state machine ([`escort`]). Concrete behaviors live in
//! `script-content`.
//!
//! All hook execution is synchronous on the engine's pipeline thread;
//! scripts express side effects as queued [`EngineCommand`]s, never by
//! mutating the world directly.

pub mod aura;
pub mod cast;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod env;
pub mod error;
pub mod escort;
pub mod hooks;
pub mod ids;
pub mod proc;
pub mod registry;

pub use aura::{AuraCalcContext, AuraInstance, ScriptSlot};
pub use cast::{CastContext, CastFailure, CastFlags, CastResult, MapKind, TargetScheme};
pub use command::{CommandBuf, EngineCommand};
pub use config::ScriptConfig;
pub use dispatch::ScriptDispatcher;
pub use env::{
    ClassLevelStats, ContentTier, CreatureClass, CreatureStatsOracle, Env, MotionOracle,
    MovementKind, OracleError, PcgRng, QuestOracle, QuestStatus, RngOracle, ScriptEnv,
    SpellOracle, WorldOracle, mix_seed,
};
pub use error::{ErrorSeverity, ScriptError};
pub use escort::{EscortAction, EscortActions, EscortPhase, EscortTick};
pub use hooks::{AuraScript, SpellScript};
pub use ids::{
    CreatureEntry, DisplayId, EffectIndex, EntityId, MAX_SPELL_EFFECTS, QuestId, SpellId,
};
pub use proc::{ProcContext, ProcResult, TriggerTarget};
pub use registry::{BehaviorRegistry, BehaviorRegistryBuilder, RegistryError};
