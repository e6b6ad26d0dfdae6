//! Ground decal definitions.

use crate::obstacles::RotationMode;
use crate::Definition;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecalDefinition {
    pub id_string: &'static str,
    pub name: &'static str,
    /// Rotation encoding; decals without one use `Limited` on the wire.
    pub rotation_mode: Option<RotationMode>,
}

impl Definition for DecalDefinition {
    fn id_string(&self) -> &str {
        self.id_string
    }
}

/// The decal table, in wire-code order. Append-only.
pub const DECALS: &[DecalDefinition] = &[
    DecalDefinition {
        id_string: "explosion_decal",
        name: "Explosion Decal",
        rotation_mode: Some(RotationMode::Full),
    },
    DecalDefinition {
        id_string: "tire_tracks",
        name: "Tire Tracks",
        rotation_mode: Some(RotationMode::Limited),
    },
    DecalDefinition {
        id_string: "floor_stain",
        name: "Floor Stain",
        rotation_mode: None,
    },
];
