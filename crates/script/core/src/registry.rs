//! Process-wide spell/aura behavior bindings.
//!
//! The registry maps a spell identifier to at most one spell script and at
//! most one aura script. It is populated once at startup through the
//! builder, immutable afterwards, and read concurrently by every in-flight
//! cast. One script value may back several identifiers (crowd-control
//! rank families bind the same `Arc` many times).

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ErrorSeverity, ScriptError};
use crate::hooks::{AuraScript, SpellScript};
use crate::ids::SpellId;

/// Startup-time registration errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two scripts were bound to the same spell identifier.
    #[error("spell id {id:?} already bound to script '{existing}'")]
    DuplicateBinding { id: SpellId, existing: &'static str },
}

impl ScriptError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateBinding { .. } => "REGISTRY_DUPLICATE_BINDING",
        }
    }
}

/// Immutable id → script table, shared read-only across the pipeline.
#[derive(Default)]
pub struct BehaviorRegistry {
    spells: HashMap<SpellId, Arc<dyn SpellScript>>,
    auras: HashMap<SpellId, Arc<dyn AuraScript>>,
}

impl BehaviorRegistry {
    /// Starts building a registry.
    pub fn builder() -> BehaviorRegistryBuilder {
        BehaviorRegistryBuilder::default()
    }

    /// Returns the spell script bound to `id`, if any.
    pub fn spell_script(&self, id: SpellId) -> Option<&dyn SpellScript> {
        self.spells.get(&id).map(Arc::as_ref)
    }

    /// Returns the aura script bound to `id`, if any.
    pub fn aura_script(&self, id: SpellId) -> Option<&dyn AuraScript> {
        self.auras.get(&id).map(Arc::as_ref)
    }

    /// Number of bound spell identifiers (spell + aura bindings).
    pub fn len(&self) -> usize {
        self.spells.len() + self.auras.len()
    }

    /// Returns true if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty() && self.auras.is_empty()
    }
}

/// Builder collecting bindings before the registry is frozen.
#[derive(Default)]
pub struct BehaviorRegistryBuilder {
    spells: HashMap<SpellId, Arc<dyn SpellScript>>,
    auras: HashMap<SpellId, Arc<dyn AuraScript>>,
}

impl BehaviorRegistryBuilder {
    /// Binds a spell script to an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateBinding`] if the identifier
    /// already has a spell script; a startup configuration error.
    pub fn bind_spell(
        &mut self,
        id: SpellId,
        script: Arc<dyn SpellScript>,
    ) -> Result<&mut Self, RegistryError> {
        if let Some(existing) = self.spells.get(&id) {
            return Err(RegistryError::DuplicateBinding {
                id,
                existing: existing.name(),
            });
        }
        tracing::debug!(id = id.0, script = script.name(), "bound spell script");
        self.spells.insert(id, script);
        Ok(self)
    }

    /// Binds an aura script to an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateBinding`] if the identifier
    /// already has an aura script.
    pub fn bind_aura(
        &mut self,
        id: SpellId,
        script: Arc<dyn AuraScript>,
    ) -> Result<&mut Self, RegistryError> {
        if let Some(existing) = self.auras.get(&id) {
            return Err(RegistryError::DuplicateBinding {
                id,
                existing: existing.name(),
            });
        }
        tracing::debug!(id = id.0, script = script.name(), "bound aura script");
        self.auras.insert(id, script);
        Ok(self)
    }

    /// Freezes the bindings into an immutable registry.
    pub fn build(self) -> BehaviorRegistry {
        BehaviorRegistry {
            spells: self.spells,
            auras: self.auras,
        }
    }
}
