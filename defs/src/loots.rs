//! Loot item definitions.
//!
//! One registry covers every item that can exist on the ground or in a
//! hand: weapons, healing items, ammo, and throwables all share the loot
//! code space, so a player's active item and a projectile's source item
//! reference the same table.

use crate::Definition;

/// Broad item family; drives which systems consume the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LootKind {
    Gun,
    Melee,
    Healing,
    Ammo,
    Throwable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootDefinition {
    pub id_string: &'static str,
    pub name: &'static str,
    pub kind: LootKind,
}

impl Definition for LootDefinition {
    fn id_string(&self) -> &str {
        self.id_string
    }
}

/// The loot table, in wire-code order. Append-only.
pub const LOOTS: &[LootDefinition] = &[
    LootDefinition {
        id_string: "gauze",
        name: "Gauze",
        kind: LootKind::Healing,
    },
    LootDefinition {
        id_string: "medikit",
        name: "Medikit",
        kind: LootKind::Healing,
    },
    LootDefinition {
        id_string: "cola",
        name: "Cola",
        kind: LootKind::Healing,
    },
    LootDefinition {
        id_string: "tablets",
        name: "Tablets",
        kind: LootKind::Healing,
    },
    LootDefinition {
        id_string: "m1895",
        name: "M1895",
        kind: LootKind::Gun,
    },
    LootDefinition {
        id_string: "mp40",
        name: "MP40",
        kind: LootKind::Gun,
    },
    LootDefinition {
        id_string: "flues",
        name: "Flues",
        kind: LootKind::Gun,
    },
    LootDefinition {
        id_string: "baseball_bat",
        name: "Baseball Bat",
        kind: LootKind::Melee,
    },
    LootDefinition {
        id_string: "kbar",
        name: "K-bar",
        kind: LootKind::Melee,
    },
    LootDefinition {
        id_string: "9mm",
        name: "9mm",
        kind: LootKind::Ammo,
    },
    LootDefinition {
        id_string: "frag_grenade",
        name: "Frag Grenade",
        kind: LootKind::Throwable,
    },
    LootDefinition {
        id_string: "smoke_grenade",
        name: "Smoke Grenade",
        kind: LootKind::Throwable,
    },
];
