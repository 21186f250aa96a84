//! Hiscore stat records

use serde::{Deserialize, Serialize};

/// Skills in the order the hiscore service reports them
pub const SKILL_NAMES: [&str; 24] = [
    "Overall",
    "Attack",
    "Defence",
    "Strength",
    "Hitpoints",
    "Ranged",
    "Prayer",
    "Magic",
    "Cooking",
    "Woodcutting",
    "Fletching",
    "Fishing",
    "Firemaking",
    "Crafting",
    "Smithing",
    "Mining",
    "Herblore",
    "Agility",
    "Thieving",
    "Slayer",
    "Farming",
    "Runecraft",
    "Hunter",
    "Construction",
];

/// One skill row of a player's hiscore entry
///
/// The service reports `-1` for rank and experience when a skill is unranked,
/// so every field is signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub name: String,
    pub rank: i64,
    pub level: i64,
    pub experience: i64,
}

impl StatRecord {
    pub fn new(name: impl Into<String>, rank: i64, level: i64, experience: i64) -> Self {
        Self {
            name: name.into(),
            rank,
            level,
            experience,
        }
    }

    /// Whether the service ranked this skill at all
    pub fn is_ranked(&self) -> bool {
        self.rank > 0
    }
}
