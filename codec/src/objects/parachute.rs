//! Airdrop parachute state serialization.

use bitstream::{BitReader, BitWriter};
use defs::GameRegistries;

use crate::error::CodecResult;
use crate::objects::ObjectCodec;
use crate::stream::{ReadGamePrimitives, WriteGamePrimitives};
use crate::types::Vec2;

/// Bits for the normalized descent height.
pub const HEIGHT_BITS: u8 = 8;

/// Fields resent on every parachute update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParachutePartial {
    /// Descent progress from 1.0 (spawn altitude) down to 0.0 (landed).
    pub height: f32,
}

/// Partial fields plus the drop position, fixed for the descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParachuteFull {
    pub partial: ParachutePartial,
    pub position: Vec2,
}

pub struct ParachuteCodec;

impl ObjectCodec for ParachuteCodec {
    type Partial = ParachutePartial;
    type Full = ParachuteFull;

    fn serialize_partial(
        _registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Partial,
    ) -> CodecResult<()> {
        writer.write_float(state.height, 0.0, 1.0, HEIGHT_BITS)?;
        Ok(())
    }

    fn serialize_full(
        registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Full,
    ) -> CodecResult<()> {
        Self::serialize_partial(registries, writer, &state.partial)?;
        writer.write_position(state.position)?;
        Ok(())
    }

    fn deserialize_partial(
        _registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Partial> {
        Ok(ParachutePartial {
            height: reader.read_float(0.0, 1.0, HEIGHT_BITS)?,
        })
    }

    fn deserialize_full(
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Full> {
        let partial = Self::deserialize_partial(registries, reader)?;
        let position = reader.read_position()?;
        Ok(ParachuteFull { partial, position })
    }
}
