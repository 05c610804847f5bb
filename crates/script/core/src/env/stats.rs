//! Derived per-level creature base stats.

/// Creature class used to select a base-stat row.
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
pub enum CreatureClass {
    #[default]
    Warrior,
    Paladin,
    Rogue,
    Mage,
}

/// Content tier a base-stat row belongs to.
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
pub enum ContentTier {
    Classic,
    BurningCrusade,
    #[default]
    Wrath,
}

/// One row of the per-level base-stat table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassLevelStats {
    pub base_health: u32,
    pub base_mana: u32,
}

/// Lookup of level-scaled base stats by creature class and content tier.
///
/// Backed by the host engine's balance tables. Rows may be missing for
/// out-of-range levels; callers treat that as zero stats.
pub trait CreatureStatsOracle: Send + Sync {
    /// Returns the base-stat row for a level/class/tier triple, if present.
    fn class_level_stats(
        &self,
        level: u32,
        class: CreatureClass,
        tier: ContentTier,
    ) -> Option<ClassLevelStats>;
}
