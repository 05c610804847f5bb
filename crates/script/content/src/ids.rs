//! Identifier table for the scripted spells, auras, creatures, and quests.
//!
//! Ids come from the host engine's template stores; grouping them here keeps
//! the scripts free of bare literals.

use script_core::{CreatureEntry, DisplayId, QuestId, SpellId};

// ===== replenishment =====
pub const SPELL_REPLENISHMENT: SpellId = SpellId(57669);

// ===== retaliation =====
pub const SPELL_RETALIATION: SpellId = SpellId(65932);
/// Counterattack the aura fires back at the attacker.
pub const SPELL_RETALIATION_STRIKE: SpellId = SpellId(65934);

// ===== shadowmeld =====
pub const SPELL_SHADOWMELD: SpellId = SpellId(58984);
/// Triggered stealth-flavor cast issued alongside the threat drop.
pub const SPELL_SHADOWMELD_TRIGGER: SpellId = SpellId(62196);

// ===== stoicism =====
pub const SPELL_STOICISM: SpellId = SpellId(70845);

// ===== blood reserve =====
pub const SPELL_BLOOD_RESERVE: SpellId = SpellId(64568);
/// Heal triggered when the reserve breaks; scaled by stack count.
pub const SPELL_BLOOD_RESERVE_HEAL: SpellId = SpellId(64569);

// ===== crowd-control auto-break =====
/// Modifier aura (glyph class) scaling the break threshold, by percent.
pub const SPELL_GLYPH_CC_THRESHOLD: SpellId = SpellId(7801);

/// Every rank of the fear/hex/roots/nova families that carries the
/// damage-budget break on its second effect slot.
pub const AUTO_BREAK_SPELLS: [SpellId; 18] = [
    // fear
    SpellId(5782),
    SpellId(6213),
    SpellId(6215),
    // hex
    SpellId(51514),
    // entangling roots
    SpellId(339),
    SpellId(1062),
    SpellId(5195),
    SpellId(5196),
    SpellId(9852),
    SpellId(9853),
    SpellId(26989),
    SpellId(53308),
    // frost nova
    SpellId(122),
    SpellId(865),
    SpellId(6131),
    SpellId(10230),
    SpellId(27088),
    SpellId(42917),
];

// ===== motivate / motivated (quest 25229) =====
pub const SPELL_MOTIVATE: SpellId = SpellId(74035);
pub const SPELL_MOTIVATED: SpellId = SpellId(74034);
/// Rabbit transform applied on the cosmetic branch.
pub const SPELL_RABBIT_TRANSFORM: SpellId = SpellId(74046);
/// Dummy cast that triggers the citizen's start dialogue.
pub const SPELL_MOTIVATE_FLAVOR: SpellId = SpellId(73953);
/// Dummy cast that triggers the citizen's completion dialogue.
pub const SPELL_MOTIVATE_COMPLETE: SpellId = SpellId(75078);

pub const QUEST_MOTIVATE_A_TRON: QuestId = QuestId(25229);

/// Citizen the entry cast must target.
pub const NPC_GNOME_CITIZEN: CreatureEntry = CreatureEntry(39623);
/// Entry the citizen is re-templated to while escorted.
pub const NPC_MOTIVATED_CITIZEN: CreatureEntry = CreatureEntry(39466);
/// Destination creature that completes the escort.
pub const NPC_CAPTAIN_TREAD: CreatureEntry = CreatureEntry(39675);

/// Display kept on the re-templated citizen so the model does not change.
pub const DISPLAY_GNOME_CITIZEN: DisplayId = DisplayId(39623);
