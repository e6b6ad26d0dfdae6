//! Obstacle state serialization.
//!
//! The full shape is the most conditional layout in the protocol: rotation
//! width, the variation field, and the role-specific field all depend on
//! the obstacle's definition, which is therefore written (and must be read)
//! before any of them.

use bitstream::{BitReader, BitWriter};
use defs::{GameRegistries, ObstacleDefinition, ObstacleRole};

use crate::error::{CodecError, CodecResult};
use crate::objects::ObjectCodec;
use crate::stream::{ReadGamePrimitives, WriteGamePrimitives};
use crate::types::{ObstacleRotation, Vec2};

/// Fields resent on every obstacle update.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePartial {
    pub scale: f32,
    pub dead: bool,
}

/// Role-specific sub-state; the valid variant is dictated by the
/// definition's declared [`ObstacleRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleRoleState {
    None,
    /// Door swing position, 2 bits.
    Door { offset: u8 },
    Activatable { activated: bool },
}

impl ObstacleRoleState {
    const fn role(self) -> ObstacleRole {
        match self {
            Self::None => ObstacleRole::None,
            Self::Door { .. } => ObstacleRole::Door,
            Self::Activatable { .. } => ObstacleRole::Activatable,
        }
    }
}

/// Partial fields plus the state sent when an obstacle first becomes
/// visible.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleFull {
    pub partial: ObstaclePartial,
    pub definition: ObstacleDefinition,
    pub position: Vec2,
    pub rotation: ObstacleRotation,
    pub variation: Option<u8>,
    pub role: ObstacleRoleState,
}

pub struct ObstacleCodec;

impl ObjectCodec for ObstacleCodec {
    type Partial = ObstaclePartial;
    type Full = ObstacleFull;

    fn serialize_partial(
        _registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Partial,
    ) -> CodecResult<()> {
        writer.write_scale(state.scale)?;
        writer.write_bool(state.dead);
        Ok(())
    }

    fn serialize_full(
        registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Full,
    ) -> CodecResult<()> {
        let definition = &state.definition;
        check_shape(definition, state)?;

        Self::serialize_partial(registries, writer, &state.partial)?;
        registries.obstacles.write_to_stream(writer, definition)?;
        writer.write_position(state.position)?;
        writer.write_obstacle_rotation(state.rotation)?;

        if let Some(variation) = state.variation {
            writer.write_variation(variation)?;
        }

        match state.role {
            ObstacleRoleState::Door { offset } => writer.write_bits(u64::from(offset), 2)?,
            ObstacleRoleState::Activatable { activated } => writer.write_bool(activated),
            ObstacleRoleState::None => {}
        }
        Ok(())
    }

    fn deserialize_partial(
        _registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Partial> {
        Ok(ObstaclePartial {
            scale: reader.read_scale()?,
            dead: reader.read_bool()?,
        })
    }

    fn deserialize_full(
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Full> {
        let partial = Self::deserialize_partial(registries, reader)?;

        // Conditional-field widths below all derive from the definition,
        // so it must be resolved first.
        let definition = registries.obstacles.read_from_stream(reader)?.clone();

        let position = reader.read_position()?;
        let rotation = reader.read_obstacle_rotation(definition.rotation_mode)?;

        let variation = if definition.variations.is_some() {
            Some(reader.read_variation()?)
        } else {
            None
        };

        let role = match definition.role {
            ObstacleRole::Door => ObstacleRoleState::Door {
                #[allow(clippy::cast_possible_truncation)]
                offset: reader.read_bits(2)? as u8,
            },
            ObstacleRole::Activatable => ObstacleRoleState::Activatable {
                activated: reader.read_bool()?,
            },
            ObstacleRole::None => ObstacleRoleState::None,
        };

        Ok(ObstacleFull {
            partial,
            definition,
            position,
            rotation,
            variation,
            role,
        })
    }
}

/// Rejects a full state whose conditional fields disagree with its
/// definition, before anything is written.
fn check_shape(definition: &ObstacleDefinition, state: &ObstacleFull) -> CodecResult<()> {
    if state.rotation.mode() != definition.rotation_mode {
        return Err(CodecError::RotationModeMismatch {
            expected: definition.rotation_mode,
            found: state.rotation.mode(),
        });
    }

    match (definition.variations, state.variation) {
        (Some(_), Some(_)) | (None, None) => {}
        (Some(_), None) => {
            return Err(CodecError::MissingVariation {
                id_string: definition.id_string.to_owned(),
            })
        }
        (None, Some(_)) => {
            return Err(CodecError::UnexpectedVariation {
                id_string: definition.id_string.to_owned(),
            })
        }
    }

    if state.role.role() != definition.role {
        return Err(CodecError::RoleMismatch {
            expected: definition.role,
        });
    }
    Ok(())
}
