//! Bit-level writer for encoding packed binary data.

use crate::error::{BitError, BitResult};
use crate::float::{check_float_args, steps};

/// A bit-level writer for encoding packed binary data.
///
/// Writes are accumulated in an internal buffer, most significant bit first.
/// Call [`finish`](Self::finish) to get the final byte buffer; an incomplete
/// trailing byte is zero-padded, so completed streams are byte-aligned.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// The accumulated bytes.
    bytes: Vec<u8>,
    /// Current byte being written (not yet pushed to bytes).
    current_byte: u8,
    /// Number of bits written to `current_byte` (0-7).
    bit_count: u8,
}

impl BitWriter {
    /// Creates a new empty `BitWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `BitWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            current_byte: 0,
            bit_count: 0,
        }
    }

    /// Returns the number of bits written so far.
    #[must_use]
    pub fn bits_written(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }

    /// Writes a single bit.
    pub fn write_bool(&mut self, value: bool) {
        self.current_byte = (self.current_byte << 1) | u8::from(value);
        self.bit_count += 1;
        if self.bit_count == 8 {
            self.bytes.push(self.current_byte);
            self.current_byte = 0;
            self.bit_count = 0;
        }
    }

    /// Writes up to 64 bits from an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `bits > 64`.
    /// Returns [`BitError::ValueOutOfRange`] if `value` doesn't fit in `bits`.
    pub fn write_bits(&mut self, value: u64, bits: u8) -> BitResult<()> {
        if bits > 64 {
            return Err(BitError::InvalidBitCount { bits, max_bits: 64 });
        }
        if bits == 0 {
            return Ok(());
        }
        if bits < 64 && value >= (1u64 << bits) {
            return Err(BitError::ValueOutOfRange { value, bits });
        }

        for i in (0..bits).rev() {
            self.write_bool((value >> i) & 1 == 1);
        }
        Ok(())
    }

    /// Writes a float quantized uniformly over `[min, max]` with `bits` bits.
    ///
    /// Finite values outside `[min, max]` are clamped to the range before
    /// quantization; decoders cannot distinguish a clamped input from one
    /// that was written at the bound.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `bits` is 0 or above 32,
    /// [`BitError::InvalidFloatRange`] if `min >= max`, and
    /// [`BitError::NonFiniteValue`] if `value` is NaN or infinite.
    pub fn write_float(&mut self, value: f32, min: f32, max: f32, bits: u8) -> BitResult<()> {
        check_float_args(min, max, bits)?;
        if !value.is_finite() {
            return Err(BitError::NonFiniteValue);
        }

        let clamped = value.clamp(min, max);
        // Quantize in f64: 2^32 - 1 is not representable in f32, so f32
        // arithmetic overshoots the top step at wide bit counts.
        let t = (f64::from(clamped) - f64::from(min)) / (f64::from(max) - f64::from(min));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let quantized = (t * steps(bits) as f64).round() as u64;
        self.write_bits(quantized, bits)
    }

    /// Finishes writing and returns the byte buffer.
    ///
    /// If the last byte is incomplete, it is padded with zeros on the right.
    #[must_use]
    pub fn finish(mut self) -> Vec<u8> {
        self.flush_partial_byte();
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    ///
    /// If the last byte is incomplete, it is padded with zeros on the right.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        self.flush_partial_byte();
        buf.append(&mut self.bytes);
    }

    fn flush_partial_byte(&mut self) {
        if self.bit_count > 0 {
            self.current_byte <<= 8 - self.bit_count;
            self.bytes.push(self.current_byte);
            self.current_byte = 0;
            self.bit_count = 0;
        }
    }
}
