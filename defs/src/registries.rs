//! The per-kind registries consumed by the object codecs.

use std::sync::OnceLock;

use crate::armors::{ArmorDefinition, ARMORS};
use crate::backpacks::{BackpackDefinition, BACKPACKS};
use crate::buildings::{BuildingDefinition, BUILDINGS};
use crate::decals::{DecalDefinition, DECALS};
use crate::error::{RegistryError, RegistryResult};
use crate::loots::{LootDefinition, LOOTS};
use crate::obstacles::{ObstacleDefinition, OBSTACLES};
use crate::registry::Registry;
use crate::skins::{SkinDefinition, SKINS};
use crate::synced_particles::{SyncedParticleDefinition, SYNCED_PARTICLES};

// Committed entry-count baselines for the current protocol version.
// Bump one of these in the same change that appends to its table; any
// other drift is a wire-compatibility break caught by `verify_integrity`.
const ARMOR_BASELINE: usize = 6;
const BACKPACK_BASELINE: usize = 4;
const SKIN_BASELINE: usize = 6;
const LOOT_BASELINE: usize = 12;
const OBSTACLE_BASELINE: usize = 8;
const BUILDING_BASELINE: usize = 4;
const DECAL_BASELINE: usize = 3;
const SYNCED_PARTICLE_BASELINE: usize = 3;

/// One registry per definition kind.
///
/// Fields are public so tests and tools can assemble non-standard sets;
/// production senders and receivers share [`standard_registries`].
#[derive(Debug, Clone)]
pub struct GameRegistries {
    pub armors: Registry<ArmorDefinition>,
    pub backpacks: Registry<BackpackDefinition>,
    pub skins: Registry<SkinDefinition>,
    pub loots: Registry<LootDefinition>,
    pub obstacles: Registry<ObstacleDefinition>,
    pub buildings: Registry<BuildingDefinition>,
    pub decals: Registry<DecalDefinition>,
    pub synced_particles: Registry<SyncedParticleDefinition>,
}

impl GameRegistries {
    /// Builds the standard registries from the committed tables.
    ///
    /// # Panics
    ///
    /// Panics if a committed table violates registry invariants; that is a
    /// build defect, not a runtime condition.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            armors: Registry::new(ARMORS.to_vec()).expect("armor table must be valid"),
            backpacks: Registry::new(BACKPACKS.to_vec()).expect("backpack table must be valid"),
            skins: Registry::new(SKINS.to_vec()).expect("skin table must be valid"),
            loots: Registry::new(LOOTS.to_vec()).expect("loot table must be valid"),
            obstacles: Registry::new(OBSTACLES.to_vec()).expect("obstacle table must be valid"),
            buildings: Registry::new(BUILDINGS.to_vec()).expect("building table must be valid"),
            decals: Registry::new(DECALS.to_vec()).expect("decal table must be valid"),
            synced_particles: Registry::new(SYNCED_PARTICLES.to_vec())
                .expect("synced-particle table must be valid"),
        }
    }

    /// Checks every registry's entry count against its committed baseline.
    ///
    /// Run once at startup; a mismatch means the definition tables changed
    /// without the protocol version being revisited.
    pub fn verify_integrity(&self) -> RegistryResult<()> {
        let checks: [(&'static str, usize, usize); 8] = [
            ("armor", ARMOR_BASELINE, self.armors.len()),
            ("backpack", BACKPACK_BASELINE, self.backpacks.len()),
            ("skin", SKIN_BASELINE, self.skins.len()),
            ("loot", LOOT_BASELINE, self.loots.len()),
            ("obstacle", OBSTACLE_BASELINE, self.obstacles.len()),
            ("building", BUILDING_BASELINE, self.buildings.len()),
            ("decal", DECAL_BASELINE, self.decals.len()),
            (
                "synced-particle",
                SYNCED_PARTICLE_BASELINE,
                self.synced_particles.len(),
            ),
        ];

        for (registry, expected, actual) in checks {
            if expected != actual {
                return Err(RegistryError::BaselineMismatch {
                    registry,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

/// Process-wide standard registries, built on first use.
pub fn standard_registries() -> &'static GameRegistries {
    static REGISTRIES: OnceLock<GameRegistries> = OnceLock::new();
    REGISTRIES.get_or_init(GameRegistries::standard)
}
