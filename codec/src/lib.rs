//! Object state codecs for the game's snapshot protocol.
//!
//! Every visible entity belongs to one of nine [`ObjectCategory`] values,
//! and each category implements [`ObjectCodec`]: a partial shape resent on
//! every update and a full shape (partial bits first, then the full-only
//! fields) sent when an entity first becomes visible. Layouts are pure bit
//! concatenation in fixed field order; the only dynamic widths come from
//! registry codes and definition-dependent fields, which both ends resolve
//! from the same [`defs::GameRegistries`].
//!
//! ```
//! use bitstream::{BitReader, BitWriter};
//! use codec::{LootCodec, LootPartial, ObjectCodec, Vec2};
//! use defs::standard_registries;
//!
//! let registries = standard_registries();
//! let state = LootPartial { position: Vec2::new(10.5, 20.25) };
//!
//! let mut writer = BitWriter::new();
//! LootCodec::serialize_partial(registries, &mut writer, &state)?;
//! let bytes = writer.finish();
//!
//! let mut reader = BitReader::new(&bytes);
//! let decoded = LootCodec::deserialize_partial(registries, &mut reader)?;
//! assert!((decoded.position.x - 10.5).abs() < 0.02);
//! # Ok::<(), codec::CodecError>(())
//! ```

mod error;
mod objects;
mod stream;
mod types;

pub use error::{CodecError, CodecResult};
pub use objects::{
    AnimationKind, BuildingCodec, BuildingFull, BuildingPartial, DeathMarkerCodec,
    DeathMarkerState, DecalCodec, DecalState, LootCodec, LootFull, LootPartial, ObjectCategory,
    ObjectCodec, ObstacleCodec, ObstacleFull, ObstaclePartial, ObstacleRoleState, ParachuteCodec,
    ParachuteFull, ParachutePartial, PlayerAction, PlayerCodec, PlayerFull, PlayerPartial,
    PuzzleState, SyncedParticleCodec, SyncedParticleFull, SyncedParticlePartial, ThrowableCodec,
    ThrowableFull, ThrowablePartial,
};
pub use stream::{
    ReadGamePrimitives, WriteGamePrimitives, MAX_OBJECT_SCALE, MAX_POSITION, MIN_OBJECT_SCALE,
    OBJECT_ID_BITS, PARTICLE_ROTATION_BITS, POSITION_BITS, ROTATION_BITS, SCALE_BITS,
    VARIATION_BITS,
};
pub use types::{ObjectId, ObstacleRotation, Vec2};
