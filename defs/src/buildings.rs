//! Building definitions.

use crate::Definition;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingDefinition {
    pub id_string: &'static str,
    pub name: &'static str,
}

impl Definition for BuildingDefinition {
    fn id_string(&self) -> &str {
        self.id_string
    }
}

/// The building table, in wire-code order. Append-only.
pub const BUILDINGS: &[BuildingDefinition] = &[
    BuildingDefinition {
        id_string: "house",
        name: "House",
    },
    BuildingDefinition {
        id_string: "warehouse",
        name: "Warehouse",
    },
    BuildingDefinition {
        id_string: "porta_potty",
        name: "Porta Potty",
    },
    BuildingDefinition {
        id_string: "barn",
        name: "Barn",
    },
];
