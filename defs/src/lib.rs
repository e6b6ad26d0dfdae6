//! Definition registries for the skirmish object-state codec.
//!
//! A [`Definition`] is an immutable, named record describing one kind of
//! entity or item. A [`Registry`] maps a fixed, registration-ordered list of
//! definitions to dense integer wire codes and back, and knows the minimum
//! bit width needed to encode any of them.
//!
//! # Design Principles
//!
//! - **Registration order is the wire encoding** - the tables in this crate
//!   are append-only for the lifetime of a protocol version; reordering or
//!   removing an entry silently re-codes everything after it.
//! - **Built once, read forever** - registries are constructed at process
//!   start, validated eagerly, and never mutated, so concurrent read access
//!   needs no locking.
//! - **Fail at startup, not on the wire** - duplicate or empty tables are
//!   construction errors; [`GameRegistries::verify_integrity`] catches
//!   baseline drift before the first packet is written.
//!
//! # Example
//!
//! ```
//! use defs::{standard_registries, Definition};
//!
//! let registries = standard_registries();
//! registries.verify_integrity().unwrap();
//!
//! let code = registries.armors.code_of("basic_vest").unwrap();
//! let def = registries.armors.definition_of(code).unwrap();
//! assert_eq!(def.id_string(), "basic_vest");
//! ```

mod bits;
mod error;
mod registries;
mod registry;

pub mod armors;
pub mod backpacks;
pub mod buildings;
pub mod decals;
pub mod loots;
pub mod obstacles;
pub mod skins;
pub mod synced_particles;

pub use bits::enum_bits;
pub use error::{RegistryError, RegistryResult};
pub use registries::{standard_registries, GameRegistries};
pub use registry::Registry;

pub use armors::{ArmorDefinition, ArmorKind};
pub use backpacks::BackpackDefinition;
pub use buildings::BuildingDefinition;
pub use decals::DecalDefinition;
pub use loots::{LootDefinition, LootKind};
pub use obstacles::{ObstacleDefinition, ObstacleRole, RotationMode};
pub use skins::SkinDefinition;
pub use synced_particles::SyncedParticleDefinition;

/// An immutable, named record describing one kind of entity or item.
pub trait Definition: Clone {
    /// The globally-unique identifier of this definition.
    fn id_string(&self) -> &str;
}
