//! Thrown projectile state serialization.
//!
//! Projectiles reference their item definition through the loot registry,
//! so a frag grenade in flight and on the ground share one definition.

use bitstream::{BitReader, BitWriter};
use defs::{GameRegistries, LootDefinition};

use crate::error::CodecResult;
use crate::objects::ObjectCodec;
use crate::stream::{ReadGamePrimitives, WriteGamePrimitives, ROTATION_BITS};
use crate::types::Vec2;

/// Fields resent on every projectile update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowablePartial {
    pub position: Vec2,
    pub rotation: f32,
    /// Still above obstacle height, so it passes over walls.
    pub airborne: bool,
}

/// Partial fields plus the item definition, sent on first sight.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowableFull {
    pub partial: ThrowablePartial,
    pub definition: LootDefinition,
}

pub struct ThrowableCodec;

impl ObjectCodec for ThrowableCodec {
    type Partial = ThrowablePartial;
    type Full = ThrowableFull;

    fn serialize_partial(
        _registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Partial,
    ) -> CodecResult<()> {
        writer.write_position(state.position)?;
        writer.write_rotation(state.rotation, ROTATION_BITS)?;
        writer.write_bool(state.airborne);
        Ok(())
    }

    fn serialize_full(
        registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Full,
    ) -> CodecResult<()> {
        Self::serialize_partial(registries, writer, &state.partial)?;
        registries.loots.write_to_stream(writer, &state.definition)?;
        Ok(())
    }

    fn deserialize_partial(
        _registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Partial> {
        Ok(ThrowablePartial {
            position: reader.read_position()?,
            rotation: reader.read_rotation(ROTATION_BITS)?,
            airborne: reader.read_bool()?,
        })
    }

    fn deserialize_full(
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Full> {
        let partial = Self::deserialize_partial(registries, reader)?;
        let definition = registries.loots.read_from_stream(reader)?.clone();
        Ok(ThrowableFull {
            partial,
            definition,
        })
    }
}
