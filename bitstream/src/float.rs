//! Shared validation for quantized-float fields.

use crate::error::{BitError, BitResult};

/// Maximum bit count for a quantized float field.
pub const MAX_FLOAT_BITS: u8 = 32;

/// Number of quantization steps for a `bits`-wide field: `2^bits - 1`.
pub fn steps(bits: u8) -> u64 {
    (1u64 << bits) - 1
}

/// Validates the shared arguments of `write_float`/`read_float`.
pub fn check_float_args(min: f32, max: f32, bits: u8) -> BitResult<()> {
    if bits == 0 || bits > MAX_FLOAT_BITS {
        return Err(BitError::InvalidBitCount {
            bits,
            max_bits: MAX_FLOAT_BITS,
        });
    }
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(BitError::InvalidFloatRange);
    }
    Ok(())
}
