//! Obstacle definitions and the metadata the codec consults before
//! deciding which conditional fields to read or write.

use crate::Definition;

/// How an obstacle's rotation is encoded on the wire.
///
/// The mode is part of the definition, so a decoder must resolve the
/// definition before it can size the rotation field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationMode {
    /// Free rotation, 16 bits.
    Full,
    /// One of four orientations, 2 bits.
    Limited,
    /// Two orientations, 1 bit.
    Binary,
    /// Never rotates; zero bits.
    None,
}

/// Special behavior attached to an obstacle, if any.
///
/// Exactly one role-specific field is serialized per obstacle: a 2-bit
/// door offset for `Door`, an activation flag for `Activatable`, nothing
/// for `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObstacleRole {
    None,
    Door,
    Activatable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleDefinition {
    pub id_string: &'static str,
    pub name: &'static str,
    pub rotation_mode: RotationMode,
    pub role: ObstacleRole,
    /// Number of cosmetic variations, if the obstacle has any.
    pub variations: Option<u8>,
}

impl Definition for ObstacleDefinition {
    fn id_string(&self) -> &str {
        self.id_string
    }
}

/// The obstacle table, in wire-code order. Append-only.
pub const OBSTACLES: &[ObstacleDefinition] = &[
    ObstacleDefinition {
        id_string: "oak_tree",
        name: "Oak Tree",
        rotation_mode: RotationMode::Full,
        role: ObstacleRole::None,
        variations: Some(3),
    },
    ObstacleDefinition {
        id_string: "rock",
        name: "Rock",
        rotation_mode: RotationMode::Full,
        role: ObstacleRole::None,
        variations: Some(7),
    },
    ObstacleDefinition {
        id_string: "bush",
        name: "Bush",
        rotation_mode: RotationMode::Full,
        role: ObstacleRole::None,
        variations: Some(2),
    },
    ObstacleDefinition {
        id_string: "barrel",
        name: "Barrel",
        rotation_mode: RotationMode::Full,
        role: ObstacleRole::None,
        variations: None,
    },
    ObstacleDefinition {
        id_string: "regular_crate",
        name: "Regular Crate",
        rotation_mode: RotationMode::Binary,
        role: ObstacleRole::None,
        variations: None,
    },
    ObstacleDefinition {
        id_string: "metal_wall",
        name: "Metal Wall",
        rotation_mode: RotationMode::Limited,
        role: ObstacleRole::None,
        variations: None,
    },
    ObstacleDefinition {
        id_string: "house_door",
        name: "House Door",
        rotation_mode: RotationMode::Limited,
        role: ObstacleRole::Door,
        variations: None,
    },
    ObstacleDefinition {
        id_string: "generator",
        name: "Generator",
        rotation_mode: RotationMode::Limited,
        role: ObstacleRole::Activatable,
        variations: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variation_counts_fit_the_three_bit_field() {
        for obstacle in OBSTACLES {
            if let Some(count) = obstacle.variations {
                assert!(count >= 1 && count <= 8, "{} variations", obstacle.id_string);
            }
        }
    }

    #[test]
    fn table_covers_every_role() {
        for role in [ObstacleRole::None, ObstacleRole::Door, ObstacleRole::Activatable] {
            assert!(OBSTACLES.iter().any(|o| o.role == role));
        }
    }
}
