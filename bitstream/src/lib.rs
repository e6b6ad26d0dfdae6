//! Low-level bit packing primitives for the skirmish object-state codec.
//!
//! This crate provides [`BitWriter`] and [`BitReader`] for bit-level encoding
//! and decoding of object-update payloads: booleans, fixed-width unsigned
//! integers, and floats quantized uniformly over a declared range.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked; reading past the
//!   end is a reported error, never undefined behavior.
//! - **No domain knowledge** - This crate knows nothing about entities,
//!   definitions, or game state.
//! - **Bit-exact ordering** - Bits appear in exactly the order requested,
//!   with no implicit padding between fields. Completed streams are
//!   zero-padded to a byte boundary.
//!
//! # Example
//!
//! ```
//! use bitstream::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bool(true);
//! writer.write_bits(42, 7).unwrap();
//! writer.write_float(0.5, 0.0, 1.0, 8).unwrap();
//!
//! let bytes = writer.finish();
//!
//! let mut reader = BitReader::new(&bytes);
//! assert!(reader.read_bool().unwrap());
//! assert_eq!(reader.read_bits(7).unwrap(), 42);
//! let height = reader.read_float(0.0, 1.0, 8).unwrap();
//! assert!((height - 0.5).abs() <= 1.0 / 255.0);
//! ```

mod error;
mod float;
mod reader;
mod writer;

pub use error::{BitError, BitResult};
pub use float::MAX_FLOAT_BITS;
pub use reader::BitReader;
pub use writer::BitWriter;
