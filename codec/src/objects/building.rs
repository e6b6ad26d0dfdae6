//! Building state serialization.

use bitstream::{BitReader, BitWriter};
use defs::{BuildingDefinition, GameRegistries};

use crate::error::CodecResult;
use crate::objects::ObjectCodec;
use crate::stream::{ReadGamePrimitives, WriteGamePrimitives};
use crate::types::Vec2;

/// Puzzle progress for buildings that have one. The error sequence number
/// bumps on every wrong attempt so clients can replay the failure effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleState {
    pub solved: bool,
    pub error_seq: bool,
}

/// Fields resent on every building update.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingPartial {
    /// Ceiling destroyed.
    pub dead: bool,
    pub puzzle: Option<PuzzleState>,
}

/// Partial fields plus the state sent when a building first becomes
/// visible.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingFull {
    pub partial: BuildingPartial,
    pub definition: BuildingDefinition,
    pub position: Vec2,
    /// One of four cardinal orientations.
    pub orientation: u8,
}

pub struct BuildingCodec;

impl ObjectCodec for BuildingCodec {
    type Partial = BuildingPartial;
    type Full = BuildingFull;

    fn serialize_partial(
        _registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Partial,
    ) -> CodecResult<()> {
        writer.write_bool(state.dead);
        writer.write_bool(state.puzzle.is_some());
        if let Some(puzzle) = state.puzzle {
            writer.write_bool(puzzle.solved);
            writer.write_bool(puzzle.error_seq);
        }
        Ok(())
    }

    fn serialize_full(
        registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Full,
    ) -> CodecResult<()> {
        Self::serialize_partial(registries, writer, &state.partial)?;
        registries
            .buildings
            .write_to_stream(writer, &state.definition)?;
        writer.write_position(state.position)?;
        writer.write_bits(u64::from(state.orientation), 2)?;
        Ok(())
    }

    fn deserialize_partial(
        _registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Partial> {
        let dead = reader.read_bool()?;
        let puzzle = if reader.read_bool()? {
            Some(PuzzleState {
                solved: reader.read_bool()?,
                error_seq: reader.read_bool()?,
            })
        } else {
            None
        };
        Ok(BuildingPartial { dead, puzzle })
    }

    fn deserialize_full(
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Full> {
        let partial = Self::deserialize_partial(registries, reader)?;
        let definition = registries.buildings.read_from_stream(reader)?.clone();
        let position = reader.read_position()?;
        #[allow(clippy::cast_possible_truncation)]
        let orientation = reader.read_bits(2)? as u8;

        Ok(BuildingFull {
            partial,
            definition,
            position,
            orientation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_vec2_close;
    use defs::{standard_registries, Definition};

    fn building(id: &str) -> BuildingDefinition {
        standard_registries()
            .buildings
            .iter()
            .find(|b| b.id_string() == id)
            .unwrap()
            .clone()
    }

    #[test]
    fn partial_without_puzzle_is_two_bits() {
        let registries = standard_registries();
        let state = BuildingPartial {
            dead: false,
            puzzle: None,
        };

        let mut writer = BitWriter::new();
        BuildingCodec::serialize_partial(registries, &mut writer, &state).unwrap();
        assert_eq!(writer.bits_written(), 2);
        let bytes = writer.finish();

        let mut reader = BitReader::new(&bytes);
        let decoded = BuildingCodec::deserialize_partial(registries, &mut reader).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn puzzle_adds_exactly_two_bits() {
        let registries = standard_registries();
        let state = BuildingPartial {
            dead: true,
            puzzle: Some(PuzzleState {
                solved: true,
                error_seq: false,
            }),
        };

        let mut writer = BitWriter::new();
        BuildingCodec::serialize_partial(registries, &mut writer, &state).unwrap();
        assert_eq!(writer.bits_written(), 4);
        let bytes = writer.finish();

        let mut reader = BitReader::new(&bytes);
        let decoded = BuildingCodec::deserialize_partial(registries, &mut reader).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn full_roundtrip() {
        let registries = standard_registries();
        let state = BuildingFull {
            partial: BuildingPartial {
                dead: false,
                puzzle: Some(PuzzleState {
                    solved: false,
                    error_seq: true,
                }),
            },
            definition: building("warehouse"),
            position: Vec2::new(640.0, 320.0),
            orientation: 3,
        };

        let mut writer = BitWriter::new();
        BuildingCodec::serialize_full(registries, &mut writer, &state).unwrap();
        let bits = writer.bits_written();
        let bytes = writer.finish();

        let mut reader = BitReader::new(&bytes);
        let decoded = BuildingCodec::deserialize_full(registries, &mut reader).unwrap();
        assert_eq!(reader.bit_position(), bits);
        assert_eq!(decoded.partial, state.partial);
        assert_eq!(decoded.definition, state.definition);
        assert_vec2_close(decoded.position, state.position);
        assert_eq!(decoded.orientation, 3);
    }

    #[test]
    fn orientation_above_three_is_rejected() {
        let registries = standard_registries();
        let state = BuildingFull {
            partial: BuildingPartial {
                dead: false,
                puzzle: None,
            },
            definition: building("house"),
            position: Vec2::default(),
            orientation: 4,
        };

        let mut writer = BitWriter::new();
        assert!(BuildingCodec::serialize_full(registries, &mut writer, &state).is_err());
    }
}
