//! Game-level stream primitives layered over the raw bitstream.
//!
//! The bitstream crate knows nothing about the game; these extension traits
//! add the domain encodings every category codec shares, with the bit
//! budgets committed here as constants.

use std::f32::consts::PI;

use bitstream::{BitReader, BitResult, BitWriter};
use defs::RotationMode;

use crate::types::{ObjectId, ObstacleRotation, Vec2};

/// Upper bound of the world coordinate space; positions quantize over
/// `[0, MAX_POSITION]` per axis.
pub const MAX_POSITION: f32 = 1024.0;
/// Bits per position axis.
pub const POSITION_BITS: u8 = 16;
/// Bits for a free rotation (players, throwables, full-mode obstacles).
pub const ROTATION_BITS: u8 = 16;
/// Bits for a synced particle's coarser rotation.
pub const PARTICLE_ROTATION_BITS: u8 = 8;
/// Object scale range and width.
pub const MIN_OBJECT_SCALE: f32 = 0.25;
pub const MAX_OBJECT_SCALE: f32 = 3.0;
pub const SCALE_BITS: u8 = 8;
/// Bits for a cosmetic variation index.
pub const VARIATION_BITS: u8 = 3;
/// Bits for a compact object reference.
pub const OBJECT_ID_BITS: u8 = 16;

/// Domain encodings on top of [`BitWriter`].
pub trait WriteGamePrimitives {
    /// Writes a 2D position, [`POSITION_BITS`] per axis over
    /// `[0, MAX_POSITION]`.
    fn write_position(&mut self, position: Vec2) -> BitResult<()>;

    /// Writes a rotation in radians over `[-π, π]` with `bits` bits.
    fn write_rotation(&mut self, rotation: f32, bits: u8) -> BitResult<()>;

    /// Writes an object scale with the standard scale quantizer.
    fn write_scale(&mut self, scale: f32) -> BitResult<()>;

    /// Writes a cosmetic variation index in [`VARIATION_BITS`] bits.
    fn write_variation(&mut self, variation: u8) -> BitResult<()>;

    /// Writes a compact object reference in [`OBJECT_ID_BITS`] bits.
    fn write_object_id(&mut self, id: ObjectId) -> BitResult<()>;

    /// Writes a rotation whose width follows the value's [`RotationMode`]:
    /// 16, 2, 1, or 0 bits.
    fn write_obstacle_rotation(&mut self, rotation: ObstacleRotation) -> BitResult<()>;
}

impl WriteGamePrimitives for BitWriter {
    fn write_position(&mut self, position: Vec2) -> BitResult<()> {
        self.write_float(position.x, 0.0, MAX_POSITION, POSITION_BITS)?;
        self.write_float(position.y, 0.0, MAX_POSITION, POSITION_BITS)
    }

    fn write_rotation(&mut self, rotation: f32, bits: u8) -> BitResult<()> {
        self.write_float(rotation, -PI, PI, bits)
    }

    fn write_scale(&mut self, scale: f32) -> BitResult<()> {
        self.write_float(scale, MIN_OBJECT_SCALE, MAX_OBJECT_SCALE, SCALE_BITS)
    }

    fn write_variation(&mut self, variation: u8) -> BitResult<()> {
        self.write_bits(u64::from(variation), VARIATION_BITS)
    }

    fn write_object_id(&mut self, id: ObjectId) -> BitResult<()> {
        self.write_bits(u64::from(id.raw()), OBJECT_ID_BITS)
    }

    fn write_obstacle_rotation(&mut self, rotation: ObstacleRotation) -> BitResult<()> {
        match rotation {
            ObstacleRotation::Full(value) => self.write_rotation(value, ROTATION_BITS),
            ObstacleRotation::Limited(orientation) => {
                self.write_bits(u64::from(orientation), 2)
            }
            ObstacleRotation::Binary(flipped) => {
                self.write_bool(flipped);
                Ok(())
            }
            ObstacleRotation::None => Ok(()),
        }
    }
}

/// Domain decodings on top of [`BitReader`].
pub trait ReadGamePrimitives {
    fn read_position(&mut self) -> BitResult<Vec2>;
    fn read_rotation(&mut self, bits: u8) -> BitResult<f32>;
    fn read_scale(&mut self) -> BitResult<f32>;
    fn read_variation(&mut self) -> BitResult<u8>;
    fn read_object_id(&mut self) -> BitResult<ObjectId>;

    /// Reads a rotation sized by `mode`.
    ///
    /// The mode comes from a definition decoded earlier in the same
    /// message; callers must resolve that definition before this field.
    fn read_obstacle_rotation(&mut self, mode: RotationMode) -> BitResult<ObstacleRotation>;
}

impl ReadGamePrimitives for BitReader<'_> {
    fn read_position(&mut self) -> BitResult<Vec2> {
        let x = self.read_float(0.0, MAX_POSITION, POSITION_BITS)?;
        let y = self.read_float(0.0, MAX_POSITION, POSITION_BITS)?;
        Ok(Vec2::new(x, y))
    }

    fn read_rotation(&mut self, bits: u8) -> BitResult<f32> {
        self.read_float(-PI, PI, bits)
    }

    fn read_scale(&mut self) -> BitResult<f32> {
        self.read_float(MIN_OBJECT_SCALE, MAX_OBJECT_SCALE, SCALE_BITS)
    }

    fn read_variation(&mut self) -> BitResult<u8> {
        #[allow(clippy::cast_possible_truncation)]
        let variation = self.read_bits(VARIATION_BITS)? as u8;
        Ok(variation)
    }

    fn read_object_id(&mut self) -> BitResult<ObjectId> {
        #[allow(clippy::cast_possible_truncation)]
        let raw = self.read_bits(OBJECT_ID_BITS)? as u16;
        Ok(ObjectId::new(raw))
    }

    fn read_obstacle_rotation(&mut self, mode: RotationMode) -> BitResult<ObstacleRotation> {
        Ok(match mode {
            RotationMode::Full => ObstacleRotation::Full(self.read_rotation(ROTATION_BITS)?),
            RotationMode::Limited => {
                #[allow(clippy::cast_possible_truncation)]
                let orientation = self.read_bits(2)? as u8;
                ObstacleRotation::Limited(orientation)
            }
            RotationMode::Binary => ObstacleRotation::Binary(self.read_bool()?),
            RotationMode::None => ObstacleRotation::None,
        })
    }
}
