//! Per-category object codecs.
//!
//! Each category implements [`ObjectCodec`]: partial-write, full-write,
//! partial-read, full-read over that category's state shape. A full message
//! is always the partial bits followed by the full-only fields, so a full
//! state satisfies the partial contract by construction (`Full` embeds
//! `Partial`).
//!
//! The category tag itself and the outer framing (which entity, partial vs.
//! full) are produced and consumed by the caller; these codecs only define
//! the payload layout once a category and depth are selected.

use bitstream::{BitReader, BitWriter};
use defs::{enum_bits, GameRegistries};

use crate::error::CodecResult;

mod building;
mod death_marker;
mod decal;
mod loot;
mod obstacle;
mod parachute;
mod player;
mod synced_particle;
mod throwable;

pub use building::{BuildingCodec, BuildingFull, BuildingPartial, PuzzleState};
pub use death_marker::{DeathMarkerCodec, DeathMarkerState};
pub use decal::{DecalCodec, DecalState};
pub use loot::{LootCodec, LootFull, LootPartial};
pub use obstacle::{ObstacleCodec, ObstacleFull, ObstaclePartial, ObstacleRoleState};
pub use parachute::{ParachuteCodec, ParachuteFull, ParachutePartial};
pub use player::{AnimationKind, PlayerAction, PlayerCodec, PlayerFull, PlayerPartial};
pub use synced_particle::{SyncedParticleCodec, SyncedParticleFull, SyncedParticlePartial};
pub use throwable::{ThrowableCodec, ThrowableFull, ThrowablePartial};

/// The supported object categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectCategory {
    Player,
    Obstacle,
    Loot,
    DeathMarker,
    Building,
    Decal,
    Parachute,
    ThrowableProjectile,
    SyncedParticle,
}

impl ObjectCategory {
    /// Number of categories.
    pub const COUNT: usize = 9;

    /// Bits needed to encode a category tag.
    pub const BITS: u8 = enum_bits(Self::COUNT);

    const ALL: [Self; Self::COUNT] = [
        Self::Player,
        Self::Obstacle,
        Self::Loot,
        Self::DeathMarker,
        Self::Building,
        Self::Decal,
        Self::Parachute,
        Self::ThrowableProjectile,
        Self::SyncedParticle,
    ];

    /// The wire ordinal of this category.
    #[must_use]
    pub const fn ordinal(self) -> u64 {
        self as u64
    }

    /// Resolves a wire ordinal back to a category.
    #[must_use]
    pub fn from_ordinal(ordinal: u64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

/// The four serialization operations every category supports.
///
/// All operations take the registries explicitly: definitions embedded in
/// state encode as registry codes, and decoding conditional fields requires
/// definition metadata resolved from the same registries the sender used.
pub trait ObjectCodec {
    /// Fields resent on every update of a known entity.
    type Partial;
    /// Partial fields plus the fields sent on first sight or structural
    /// change.
    type Full;

    /// Writes the partial shape in fixed field order.
    fn serialize_partial(
        registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Partial,
    ) -> CodecResult<()>;

    /// Writes the partial shape followed by the full-only fields.
    fn serialize_full(
        registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Full,
    ) -> CodecResult<()>;

    /// Reads the partial shape in the order written.
    fn deserialize_partial(
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Partial>;

    /// Reads a partial shape followed by the full-only fields.
    fn deserialize_full(
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Full>;
}
