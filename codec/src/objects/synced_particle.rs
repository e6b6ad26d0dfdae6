//! Synced particle state serialization.

use bitstream::{BitReader, BitWriter};
use defs::{GameRegistries, SyncedParticleDefinition};

use crate::error::CodecResult;
use crate::objects::ObjectCodec;
use crate::stream::{ReadGamePrimitives, WriteGamePrimitives, PARTICLE_ROTATION_BITS};
use crate::types::Vec2;

/// Bits for the optional alpha channel.
pub const ALPHA_BITS: u8 = 8;

/// Fields resent on every particle update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncedParticlePartial {
    pub position: Vec2,
    pub rotation: f32,
    /// Present only while the particle is growing or shrinking.
    pub scale: Option<f32>,
    /// Present only while the particle is fading, over `[0, 1]`.
    pub alpha: Option<f32>,
}

/// Partial fields plus the state sent when a particle first becomes
/// visible.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncedParticleFull {
    pub partial: SyncedParticlePartial,
    pub definition: SyncedParticleDefinition,
    pub variation: Option<u8>,
}

pub struct SyncedParticleCodec;

impl ObjectCodec for SyncedParticleCodec {
    type Partial = SyncedParticlePartial;
    type Full = SyncedParticleFull;

    fn serialize_partial(
        _registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Partial,
    ) -> CodecResult<()> {
        writer.write_position(state.position)?;
        writer.write_rotation(state.rotation, PARTICLE_ROTATION_BITS)?;

        writer.write_bool(state.scale.is_some());
        if let Some(scale) = state.scale {
            writer.write_scale(scale)?;
        }

        writer.write_bool(state.alpha.is_some());
        if let Some(alpha) = state.alpha {
            writer.write_float(alpha, 0.0, 1.0, ALPHA_BITS)?;
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
            .synced_particles
            .write_to_stream(writer, &state.definition)?;

        writer.write_bool(state.variation.is_some());
        if let Some(variation) = state.variation {
            writer.write_variation(variation)?;
        }
        Ok(())
    }

    fn deserialize_partial(
        _registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Partial> {
        let position = reader.read_position()?;
        let rotation = reader.read_rotation(PARTICLE_ROTATION_BITS)?;

        let scale = if reader.read_bool()? {
            Some(reader.read_scale()?)
        } else {
            None
        };
        let alpha = if reader.read_bool()? {
            Some(reader.read_float(0.0, 1.0, ALPHA_BITS)?)
        } else {
            None
        };

        Ok(SyncedParticlePartial {
            position,
            rotation,
            scale,
            alpha,
        })
    }

    fn deserialize_full(
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Full> {
        let partial = Self::deserialize_partial(registries, reader)?;
        let definition = registries
            .synced_particles
            .read_from_stream(reader)?
            .clone();

        let variation = if reader.read_bool()? {
            Some(reader.read_variation()?)
        } else {
            None
        };

        Ok(SyncedParticleFull {
            partial,
            definition,
            variation,
        })
    }
}
