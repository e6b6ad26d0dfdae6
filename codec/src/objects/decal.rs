//! Decal serialization.
//!
//! Decals are static, so partial and full are the same shape. The rotation
//! width follows the definition's rotation mode, defaulting to the 2-bit
//! limited encoding when the definition leaves it unspecified.

use bitstream::{BitReader, BitWriter};
use defs::{DecalDefinition, GameRegistries, RotationMode};

use crate::error::{CodecError, CodecResult};
use crate::objects::ObjectCodec;
use crate::stream::{ReadGamePrimitives, WriteGamePrimitives};
use crate::types::{ObstacleRotation, Vec2};

/// The complete state of a decal.
#[derive(Debug, Clone, PartialEq)]
pub struct DecalState {
    pub definition: DecalDefinition,
    pub position: Vec2,
    pub rotation: ObstacleRotation,
}

const fn effective_mode(definition: &DecalDefinition) -> RotationMode {
    match definition.rotation_mode {
        Some(mode) => mode,
        None => RotationMode::Limited,
    }
}

pub struct DecalCodec;

impl ObjectCodec for DecalCodec {
    type Partial = DecalState;
    type Full = DecalState;

    fn serialize_partial(
        registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Partial,
    ) -> CodecResult<()> {
        let expected = effective_mode(&state.definition);
        if state.rotation.mode() != expected {
            return Err(CodecError::RotationModeMismatch {
                expected,
                found: state.rotation.mode(),
            });
        }

        registries.decals.write_to_stream(writer, &state.definition)?;
        writer.write_position(state.position)?;
        writer.write_obstacle_rotation(state.rotation)?;
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
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Partial> {
        let definition = registries.decals.read_from_stream(reader)?.clone();
        let position = reader.read_position()?;
        let rotation = reader.read_obstacle_rotation(effective_mode(&definition))?;

        Ok(DecalState {
            definition,
            position,
            rotation,
        })
    }

    fn deserialize_full(
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Full> {
        Self::deserialize_partial(registries, reader)
    }
}
