//! Armor definitions: helmets and vests.

use crate::Definition;

/// Which slot an armor piece occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArmorKind {
    Helmet,
    Vest,
}

/// An armor tier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorDefinition {
    pub id_string: &'static str,
    pub name: &'static str,
    pub kind: ArmorKind,
    pub level: u8,
    /// Damage reduction as a fraction of incoming damage.
    pub damage_reduction: f32,
}

impl Definition for ArmorDefinition {
    fn id_string(&self) -> &str {
        self.id_string
    }
}

/// The armor table, in wire-code order. Append-only.
pub const ARMORS: &[ArmorDefinition] = &[
    ArmorDefinition {
        id_string: "basic_helmet",
        name: "Basic Helmet",
        kind: ArmorKind::Helmet,
        level: 1,
        damage_reduction: 0.1,
    },
    ArmorDefinition {
        id_string: "regular_helmet",
        name: "Regular Helmet",
        kind: ArmorKind::Helmet,
        level: 2,
        damage_reduction: 0.15,
    },
    ArmorDefinition {
        id_string: "tactical_helmet",
        name: "Tactical Helmet",
        kind: ArmorKind::Helmet,
        level: 3,
        damage_reduction: 0.2,
    },
    ArmorDefinition {
        id_string: "basic_vest",
        name: "Basic Vest",
        kind: ArmorKind::Vest,
        level: 1,
        damage_reduction: 0.2,
    },
    ArmorDefinition {
        id_string: "regular_vest",
        name: "Regular Vest",
        kind: ArmorKind::Vest,
        level: 2,
        damage_reduction: 0.35,
    },
    ArmorDefinition {
        id_string: "tactical_vest",
        name: "Tactical Vest",
        kind: ArmorKind::Vest,
        level: 3,
        damage_reduction: 0.45,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helmets_precede_vests() {
        assert!(ARMORS[..3].iter().all(|a| a.kind == ArmorKind::Helmet));
        assert!(ARMORS[3..].iter().all(|a| a.kind == ArmorKind::Vest));
    }

    #[test]
    fn basic_vest_keeps_its_wire_code() {
        // Code 3 is load-bearing for the current protocol version.
        assert_eq!(ARMORS[3].id_string, "basic_vest");
    }
}
