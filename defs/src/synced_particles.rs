//! Definitions for particles whose motion is driven by the server.

use crate::Definition;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncedParticleDefinition {
    pub id_string: &'static str,
    pub name: &'static str,
}

impl Definition for SyncedParticleDefinition {
    fn id_string(&self) -> &str {
        self.id_string
    }
}

/// The synced-particle table, in wire-code order. Append-only.
pub const SYNCED_PARTICLES: &[SyncedParticleDefinition] = &[
    SyncedParticleDefinition {
        id_string: "smoke_grenade_particle",
        name: "Smoke Grenade Particle",
    },
    SyncedParticleDefinition {
        id_string: "airdrop_smoke",
        name: "Airdrop Smoke",
    },
    SyncedParticleDefinition {
        id_string: "shattered_glass",
        name: "Shattered Glass",
    },
];
