//! Backpack definitions.

use crate::Definition;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackpackDefinition {
    pub id_string: &'static str,
    pub name: &'static str,
    pub level: u8,
}

impl Definition for BackpackDefinition {
    fn id_string(&self) -> &str {
        self.id_string
    }
}

/// The backpack table, in wire-code order. Append-only.
pub const BACKPACKS: &[BackpackDefinition] = &[
    BackpackDefinition {
        id_string: "bag",
        name: "Bag",
        level: 0,
    },
    BackpackDefinition {
        id_string: "satchel",
        name: "Satchel",
        level: 1,
    },
    BackpackDefinition {
        id_string: "rucksack",
        name: "Rucksack",
        level: 2,
    },
    BackpackDefinition {
        id_string: "tactical_pack",
        name: "Tactical Pack",
        level: 3,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_ascend_with_wire_code() {
        for pair in BACKPACKS.windows(2) {
            assert!(pair[0].level < pair[1].level);
        }
    }
}
