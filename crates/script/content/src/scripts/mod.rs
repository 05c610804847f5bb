//! The concrete behavior scripts and their registration.

mod auto_break;
mod blood_reserve;
mod motivate;
mod motivated;
mod replenishment;
mod retaliation;
mod shadowmeld;
mod stoicism;

pub use auto_break::AutoBreakProc;
pub use blood_reserve::BloodReserveEnchant;
pub use motivate::Motivate;
pub use motivated::Motivated;
pub use replenishment::Replenishment;
pub use retaliation::RetaliationDummy;
pub use shadowmeld::Shadowmeld;
pub use stoicism::StoicismAbsorb;

use std::sync::Arc;

use script_core::{AuraScript, BehaviorRegistryBuilder, RegistryError, ScriptConfig};

use crate::ids::*;

/// Binds every script in this crate to its spell identifiers.
///
/// Called once at startup; a duplicate binding anywhere is surfaced as a
/// configuration error rather than silently shadowing a script.
pub fn register_scripts(
    builder: &mut BehaviorRegistryBuilder,
    config: &ScriptConfig,
) -> Result<(), RegistryError> {
    builder.bind_spell(SPELL_REPLENISHMENT, Arc::new(Replenishment))?;
    builder.bind_aura(SPELL_RETALIATION, Arc::new(RetaliationDummy))?;
    builder.bind_spell(SPELL_SHADOWMELD, Arc::new(Shadowmeld))?;
    builder.bind_aura(SPELL_STOICISM, Arc::new(StoicismAbsorb))?;
    builder.bind_aura(SPELL_BLOOD_RESERVE, Arc::new(BloodReserveEnchant))?;

    // One shared instance covers every rank of the crowd-control families.
    let auto_break: Arc<dyn AuraScript> = Arc::new(AutoBreakProc);
    for id in AUTO_BREAK_SPELLS {
        builder.bind_aura(id, Arc::clone(&auto_break))?;
    }

    builder.bind_spell(SPELL_MOTIVATE, Arc::new(Motivate::new(config)))?;
    builder.bind_aura(SPELL_MOTIVATED, Arc::new(Motivated::new(config)))?;
    Ok(())
}
