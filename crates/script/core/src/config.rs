/// Script configuration constants and tunable parameters.
///
/// Values the behavior scripts read at runtime instead of baking in
/// literals. Hosts usually load this from TOML (see script-content's
/// `ConfigLoader`) and hand it to `register_scripts`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScriptConfig {
    /// Percent chance that the escort entry cast takes the harmless cosmetic
    /// branch (rabbit transform) instead of starting the escort.
    pub cosmetic_branch_chance: u32,

    /// Minimum trailing distance for the escort follow order, in yards.
    pub follow_distance_min: f32,
    /// Maximum trailing distance for the escort follow order, in yards.
    pub follow_distance_max: f32,
    /// Minimum orbit angle for the escort follow order, in radians.
    pub follow_angle_min: f32,
    /// Maximum orbit angle for the escort follow order, in radians.
    pub follow_angle_max: f32,

    /// Search radius around the escorted creature for the destination
    /// creature, in yards.
    pub destination_radius: f32,

    /// Forced periodicity of the escort aura, in milliseconds.
    pub escort_tick_ms: u32,
    /// Despawn delay after a tick-driven completion or abort, in milliseconds.
    pub completion_despawn_ms: u32,
    /// Despawn delay when the aura is removed externally, in milliseconds.
    pub removal_despawn_ms: u32,
    /// Respawn delay applied to the despawned creature, in milliseconds.
    pub respawn_delay_ms: u32,
}

impl ScriptConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_COSMETIC_BRANCH_CHANCE: u32 = 10;
    pub const DEFAULT_FOLLOW_DISTANCE_MIN: f32 = 0.5;
    pub const DEFAULT_FOLLOW_DISTANCE_MAX: f32 = 3.0;
    pub const DEFAULT_FOLLOW_ANGLE_MIN: f32 = core::f32::consts::PI * 0.8;
    pub const DEFAULT_FOLLOW_ANGLE_MAX: f32 = core::f32::consts::PI * 1.2;
    pub const DEFAULT_DESTINATION_RADIUS: f32 = 5.0;
    pub const DEFAULT_ESCORT_TICK_MS: u32 = 1000;
    pub const DEFAULT_COMPLETION_DESPAWN_MS: u32 = 2000;
    pub const DEFAULT_REMOVAL_DESPAWN_MS: u32 = 5000;
    pub const DEFAULT_RESPAWN_DELAY_MS: u32 = 1000;

    pub fn new() -> Self {
        Self {
            cosmetic_branch_chance: Self::DEFAULT_COSMETIC_BRANCH_CHANCE,
            follow_distance_min: Self::DEFAULT_FOLLOW_DISTANCE_MIN,
            follow_distance_max: Self::DEFAULT_FOLLOW_DISTANCE_MAX,
            follow_angle_min: Self::DEFAULT_FOLLOW_ANGLE_MIN,
            follow_angle_max: Self::DEFAULT_FOLLOW_ANGLE_MAX,
            destination_radius: Self::DEFAULT_DESTINATION_RADIUS,
            escort_tick_ms: Self::DEFAULT_ESCORT_TICK_MS,
            completion_despawn_ms: Self::DEFAULT_COMPLETION_DESPAWN_MS,
            removal_despawn_ms: Self::DEFAULT_REMOVAL_DESPAWN_MS,
            respawn_delay_ms: Self::DEFAULT_RESPAWN_DELAY_MS,
        }
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = ScriptConfig::default();
        assert_eq!(config.cosmetic_branch_chance, 10);
        assert_eq!(config.escort_tick_ms, 1000);
        assert_eq!(config.removal_despawn_ms, 5000);
        assert!(config.follow_distance_min < config.follow_distance_max);
        assert!(config.follow_angle_min < config.follow_angle_max);
    }
}
