//! Expertise option lists.
//!
//! These are the labels offered to the player when choosing expertise beyond
//! what culture grants. The chosen labels are stored as free-form strings on
//! the character; these tables only drive the picker UI.

/// Armor expertise options.
pub const ARMOR_EXPERTISE_OPTIONS: &[&str] = &[
    "Breastplate",
    "Chain Armor",
    "Half Plate",
    "Leather",
    "Shardplate",
];

/// Cultural expertise options (includes labels granted by cultures).
pub const CULTURAL_EXPERTISE_OPTIONS: &[&str] = &[
    "Alethi",
    "Azish",
    "Herdazian",
    "High Society",
    "Iriali",
    "Kharbranthian",
    "Listener",
    "Military Life",
    "Natan",
    "Reshi",
    "Shin",
    "Thaylen",
    "Underworld",
    "Unkalaki",
    "Veden",
    "Wayfarer",
];

/// Utility expertise options.
pub const UTILITY_EXPERTISE_OPTIONS: &[&str] = &[
    "Animal Care",
    "Armor Crafting",
    "Culinary Arts",
    "Engineering",
    "Equipment",
    "History",
    "Literature",
    "Military",
    "Religion",
    "Riding Horses",
    "Stormwardens",
    "Visual Arts",
    "Weapon Crafting",
];

/// Weapon expertise options.
pub const WEAPON_EXPERTISE_OPTIONS: &[&str] = &[
    "Axe",
    "Crossbow",
    "Grandbow",
    "Greatsword",
    "Half-Shard",
    "Hammer",
    "Javelin",
    "Knife",
    "Longbow",
    "Longspear",
    "Longsword",
    "Mace",
    "Poleaxe",
    "Rapier",
    "Shardblade",
    "Shield",
    "Shortbow",
    "Shortspear",
    "Sidesword",
    "Sling",
    "Staff",
    "Unarmed Attacks",
    "Warhammer",
];

/// Returns every pickable expertise label across all groups.
pub fn all_expertise_options() -> impl Iterator<Item = &'static str> {
    ARMOR_EXPERTISE_OPTIONS
        .iter()
        .chain(CULTURAL_EXPERTISE_OPTIONS)
        .chain(UTILITY_EXPERTISE_OPTIONS)
        .chain(WEAPON_EXPERTISE_OPTIONS)
        .copied()
}
