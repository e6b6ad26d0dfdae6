//! Loot item state serialization.

use bitstream::{BitReader, BitWriter};
use defs::{GameRegistries, LootDefinition};

use crate::error::CodecResult;
use crate::objects::ObjectCodec;
use crate::stream::{ReadGamePrimitives, WriteGamePrimitives};
use crate::types::Vec2;

/// Bits for a loot stack count; counts above `2^9 - 1` are rejected at
/// encode time.
pub const LOOT_COUNT_BITS: u8 = 9;

/// Fields resent on every loot update.
#[derive(Debug, Clone, PartialEq)]
pub struct LootPartial {
    pub position: Vec2,
}

/// Partial fields plus the state sent when a loot item first becomes
/// visible.
#[derive(Debug, Clone, PartialEq)]
pub struct LootFull {
    pub partial: LootPartial,
    pub definition: LootDefinition,
    /// Stack size, e.g. ammo in a dropped pile.
    pub count: u16,
    /// Whether the item was just dropped, for the spawn animation.
    pub is_new: bool,
}

pub struct LootCodec;

impl ObjectCodec for LootCodec {
    type Partial = LootPartial;
    type Full = LootFull;

    fn serialize_partial(
        _registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Partial,
    ) -> CodecResult<()> {
        writer.write_position(state.position)?;
        Ok(())
    }

    fn serialize_full(
        registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Full,
    ) -> CodecResult<()> {
        Self::serialize_partial(registries, writer, &state.partial)?;
        registries.loots.write_to_stream(writer, &state.definition)?;
        writer.write_bits(u64::from(state.count), LOOT_COUNT_BITS)?;
        writer.write_bool(state.is_new);
        Ok(())
    }

    fn deserialize_partial(
        _registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Partial> {
        Ok(LootPartial {
            position: reader.read_position()?,
        })
    }

    fn deserialize_full(
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Full> {
        let partial = Self::deserialize_partial(registries, reader)?;
        let definition = registries.loots.read_from_stream(reader)?.clone();
        #[allow(clippy::cast_possible_truncation)]
        let count = reader.read_bits(LOOT_COUNT_BITS)? as u16;
        let is_new = reader.read_bool()?;

        Ok(LootFull {
            partial,
            definition,
            count,
            is_new,
        })
    }
}
