//! Death marker serialization.
//!
//! Death markers carry so little state that the partial and full shapes
//! are identical; both depths write the same three fields.

use bitstream::{BitReader, BitWriter};
use defs::GameRegistries;

use crate::error::CodecResult;
use crate::objects::ObjectCodec;
use crate::stream::{ReadGamePrimitives, WriteGamePrimitives};
use crate::types::{ObjectId, Vec2};

/// The complete state of a death marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathMarkerState {
    pub position: Vec2,
    /// Whether the death just happened, for the drop-in animation.
    pub is_new: bool,
    /// The player whose death this marks.
    pub player_id: ObjectId,
}

pub struct DeathMarkerCodec;

impl ObjectCodec for DeathMarkerCodec {
    type Partial = DeathMarkerState;
    type Full = DeathMarkerState;

    fn serialize_partial(
        _registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Partial,
    ) -> CodecResult<()> {
        writer.write_position(state.position)?;
        writer.write_bool(state.is_new);
        writer.write_object_id(state.player_id)?;
        Ok(())
    }

    fn serialize_full(
        registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Full,
    ) -> CodecResult<()> {
        Self::serialize_partial(registries, writer, state)
    }

    fn deserialize_partial(
        _registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Partial> {
        Ok(DeathMarkerState {
            position: reader.read_position()?,
            is_new: reader.read_bool()?,
            player_id: reader.read_object_id()?,
        })
    }

    fn deserialize_full(
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Full> {
        Self::deserialize_partial(registries, reader)
    }
}
