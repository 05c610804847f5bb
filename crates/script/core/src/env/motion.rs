//! Movement-generator stack inspection.

use crate::ids::EntityId;

/// Kind of movement currently driving an entity, as seen from the top of
/// its movement-generator stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementKind {
    /// Standing still / no generator.
    #[default]
    Idle,
    /// Following another entity.
    Follow { target: EntityId },
    /// Anything else (waypoints, flee, charge, ...). Scripts only care
    /// that it is not a follow.
    Other,
}

/// Read-only view of an entity's movement state.
///
/// Movement orders themselves are issued through engine commands; this
/// oracle only answers "what is the unit doing right now".
pub trait MotionOracle: Send + Sync {
    /// Returns the kind of the top movement generator of `unit`.
    ///
    /// Despawned units report [`MovementKind::Idle`].
    fn current_movement(&self, unit: EntityId) -> MovementKind;
}
