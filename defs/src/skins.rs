//! Cosmetic skin definitions.

use crate::Definition;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkinDefinition {
    pub id_string: &'static str,
    pub name: &'static str,
}

impl Definition for SkinDefinition {
    fn id_string(&self) -> &str {
        self.id_string
    }
}

/// The skin table, in wire-code order. Append-only.
pub const SKINS: &[SkinDefinition] = &[
    SkinDefinition {
        id_string: "forest_camo",
        name: "Forest Camo",
    },
    SkinDefinition {
        id_string: "desert_camo",
        name: "Desert Camo",
    },
    SkinDefinition {
        id_string: "arctic_camo",
        name: "Arctic Camo",
    },
    SkinDefinition {
        id_string: "hazard_suit",
        name: "Hazard Suit",
    },
    SkinDefinition {
        id_string: "midnight",
        name: "Midnight",
    },
    SkinDefinition {
        id_string: "sunburst",
        name: "Sunburst",
    },
];
