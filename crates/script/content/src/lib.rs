//! Spell and aura behavior scripts plus the loaders that tune them.
//!
//! This crate houses the concrete script implementations bound to live
//! spell ids:
//! - Replenishment target capping
//! - Retaliation counter-strike proc
//! - Shadowmeld threat drop
//! - Stoicism absorb sizing
//! - Blood Reserve low-health heal
//! - Crowd-control damage budgets (fear, hex, roots, nova)
//! - The Motivate-a-Tron escort pair
//!
//! Scripts are consumed through `script-core`'s registry and dispatcher
//! and never talk to the engine directly; everything they decide comes
//! back as commands for the host to execute.

pub mod ids;
pub mod scripts;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scripts::{
    AutoBreakProc, BloodReserveEnchant, Motivate, Motivated, Replenishment, RetaliationDummy,
    Shadowmeld, StoicismAbsorb, register_scripts,
};

#[cfg(feature = "loaders")]
pub use loaders::ConfigLoader;
