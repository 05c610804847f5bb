//! Identifier newtypes shared across the script framework.
//!
//! All references into the host engine's object model are carried as plain
//! numeric ids. Scripts re-resolve them through oracles on every use; an id
//! never keeps the referenced object alive.

/// Unique identifier of a world entity (player, creature, pet).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

/// Spell (or aura source spell) identifier from the spell template store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellId(pub u32);

/// Quest identifier from the quest template store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestId(pub u32);

/// Creature template entry (the "kind" of a creature, not an instance).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureEntry(pub u32);

/// Display/model identifier for visual transformations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayId(pub u32);

/// Maximum number of effect slots a single spell may carry.
pub const MAX_SPELL_EFFECTS: usize = 3;

/// One of the (at most three) effect slots of a spell.
///
/// Several hooks are scoped to a single slot: target filtering applies per
/// effect, and the damage-budget behavior only watches its designated slot.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectIndex {
    /// Effect slot 0.
    #[default]
    First,
    /// Effect slot 1.
    Second,
    /// Effect slot 2.
    Third,
}

impl EffectIndex {
    /// Returns the zero-based slot number.
    pub const fn as_usize(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }

    /// All effect slots in engine iteration order.
    pub const ALL: [EffectIndex; MAX_SPELL_EFFECTS] =
        [Self::First, Self::Second, Self::Third];
}
