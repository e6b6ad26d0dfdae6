//! Bit-level reader with bounded operations.

use crate::error::{BitError, BitResult};
use crate::float::{check_float_args, steps};

/// A bit-level reader for decoding packed binary data.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new `BitReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Returns the number of bits remaining to read.
    #[must_use]
    pub const fn bits_remaining(&self) -> usize {
        self.data
            .len()
            .saturating_mul(8)
            .saturating_sub(self.bit_pos)
    }

    /// Returns `true` if there are no more bits to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Returns the current bit position.
    #[must_use]
    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Reads a single bit as a boolean.
    pub fn read_bool(&mut self) -> BitResult<bool> {
        if self.bits_remaining() == 0 {
            return Err(BitError::UnexpectedEof {
                requested: 1,
                available: 0,
            });
        }
        let byte_idx = self.bit_pos / 8;
        let bit_idx = self.bit_pos % 8;
        let bit = (self.data[byte_idx] >> (7 - bit_idx)) & 1;
        self.bit_pos += 1;
        Ok(bit == 1)
    }

    /// Reads up to 64 bits as an unsigned integer.
    pub fn read_bits(&mut self, bits: u8) -> BitResult<u64> {
        if bits > 64 {
            return Err(BitError::InvalidBitCount { bits, max_bits: 64 });
        }
        if bits == 0 {
            return Ok(0);
        }
        if bits as usize > self.bits_remaining() {
            return Err(BitError::UnexpectedEof {
                requested: bits as usize,
                available: self.bits_remaining(),
            });
        }

        let mut value = 0u64;
        for _ in 0..bits {
            value = (value << 1) | u64::from(self.read_bool()?);
        }
        Ok(value)
    }

    /// Reads a float quantized uniformly over `[min, max]` with `bits` bits.
    ///
    /// The result is always within `[min, max]`; the maximum error against
    /// the originally written value is one quantization step,
    /// `(max - min) / (2^bits - 1)`.
    pub fn read_float(&mut self, min: f32, max: f32, bits: u8) -> BitResult<f32> {
        check_float_args(min, max, bits)?;
        let quantized = self.read_bits(bits)?;
        // Mirror of the writer: dequantize in f64 so wide step counts stay
        // exact, then narrow once at the end.
        #[allow(clippy::cast_precision_loss)]
        let t = quantized as f64 / steps(bits) as f64;
        let value = f64::from(min) + t * (f64::from(max) - f64::from(min));
        #[allow(clippy::cast_possible_truncation)]
        let narrowed = value as f32;
        Ok(narrowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = BitReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.bits_remaining(), 0);
        assert_eq!(reader.bit_position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = BitReader::new(&[]);
        let result = reader.read_bool();
        assert!(matches!(result, Err(BitError::UnexpectedEof { .. })));
    }

    #[test]
    fn read_bools_msb_first() {
        let mut reader = BitReader::new(&[0b1011_0000]);
        assert!(reader.read_bool().unwrap());
        assert!(!reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
    }

    #[test]
    fn read_bits_across_bytes() {
        let mut reader = BitReader::new(&[0b1111_0000, 0b0000_1111]);
        assert_eq!(reader.read_bits(12).unwrap(), 0b1111_0000_0000);
        assert_eq!(reader.bits_remaining(), 4);
    }

    #[test]
    fn read_bits_zero_count() {
        let mut reader = BitReader::new(&[0xFF]);
        assert_eq!(reader.read_bits(0).unwrap(), 0);
        assert_eq!(reader.bit_position(), 0);
    }

    #[test]
    fn read_bits_invalid_count() {
        let mut reader = BitReader::new(&[0xFF; 16]);
        assert!(matches!(
            reader.read_bits(65),
            Err(BitError::InvalidBitCount { .. })
        ));
    }

    #[test]
    fn read_bits_past_end_reports_availability() {
        let mut reader = BitReader::new(&[0xFF]);
        reader.read_bits(4).unwrap();
        let err = reader.read_bits(8).unwrap_err();
        assert_eq!(
            err,
            BitError::UnexpectedEof {
                requested: 8,
                available: 4,
            }
        );
    }

    #[test]
    fn read_float_bounds() {
        let mut reader = BitReader::new(&[0x00, 0xFF]);
        assert_eq!(reader.read_float(0.0, 1.0, 8).unwrap(), 0.0);
        assert_eq!(reader.read_float(0.0, 1.0, 8).unwrap(), 1.0);
    }

    #[test]
    fn read_float_result_is_in_range() {
        let mut reader = BitReader::new(&[0b1010_1010, 0b0101_0101]);
        let value = reader.read_float(-10.0, 10.0, 16).unwrap();
        assert!((-10.0..=10.0).contains(&value));
    }

    #[test]
    fn read_float_rejects_bad_args() {
        let mut reader = BitReader::new(&[0xFF; 8]);
        assert_eq!(
            reader.read_float(1.0, 0.0, 8),
            Err(BitError::InvalidFloatRange)
        );
        assert!(matches!(
            reader.read_float(0.0, 1.0, 0),
            Err(BitError::InvalidBitCount { .. })
        ));
        // Argument failures must not advance the cursor.
        assert_eq!(reader.bit_position(), 0);
    }
}
