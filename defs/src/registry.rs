//! Ordered definition registries with dense wire codes.

use std::collections::HashMap;

use bitstream::{BitReader, BitWriter};

use crate::bits::enum_bits;
use crate::error::{RegistryError, RegistryResult};
use crate::Definition;

/// An ordered, immutable collection of definitions of one kind.
///
/// Registration position *is* the wire code: entry `i` of the input list
/// encodes as the integer `i` in [`bit_width`](Self::bit_width) bits.
/// Reordering, inserting, or removing entries therefore changes every
/// previously-assigned code — registries are append-only for the lifetime
/// of a protocol version (see [`hash`](Self::hash)).
///
/// Registries are built once at process start and never mutated, so shared
/// read access from any number of concurrent encoders/decoders is safe
/// without locking.
#[derive(Debug, Clone)]
pub struct Registry<D> {
    entries: Vec<D>,
    codes: HashMap<String, u64>,
    bit_width: u8,
}

impl<D: Definition> Registry<D> {
    /// Builds a registry from a registration-ordered definition list.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyRegistry`] for an empty list and
    /// [`RegistryError::DuplicateIdentifier`] if any id string repeats.
    pub fn new(definitions: Vec<D>) -> RegistryResult<Self> {
        if definitions.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }

        let mut codes = HashMap::with_capacity(definitions.len());
        for (code, definition) in definitions.iter().enumerate() {
            let id_string = definition.id_string().to_owned();
            if codes.insert(id_string, code as u64).is_some() {
                return Err(RegistryError::DuplicateIdentifier {
                    id_string: definition.id_string().to_owned(),
                });
            }
        }

        let bit_width = enum_bits(definitions.len());
        Ok(Self {
            entries: definitions,
            codes,
            bit_width,
        })
    }

    /// Returns the number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; empty registries are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of bits used to encode any code in this registry.
    #[must_use]
    pub const fn bit_width(&self) -> u8 {
        self.bit_width
    }

    /// Returns the definition at registration position `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&D> {
        self.entries.get(index)
    }

    /// Iterates definitions in registration (wire code) order.
    pub fn iter(&self) -> std::slice::Iter<'_, D> {
        self.entries.iter()
    }

    /// Resolves an id string to its wire code.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownIdentifier`] if not registered.
    pub fn code_of(&self, id_string: &str) -> RegistryResult<u64> {
        self.codes
            .get(id_string)
            .copied()
            .ok_or_else(|| RegistryError::UnknownIdentifier {
                id_string: id_string.to_owned(),
            })
    }

    /// Resolves a wire code to its definition.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CodeOutOfRange`] if `code >= len()`.
    pub fn definition_of(&self, code: u64) -> RegistryResult<&D> {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.entries.get(index))
            .ok_or(RegistryError::CodeOutOfRange {
                code,
                count: self.entries.len(),
            })
    }

    /// Writes a definition's code to the stream in exactly
    /// [`bit_width`](Self::bit_width) bits.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownIdentifier`] if `definition` is not
    /// from this registry.
    pub fn write_to_stream(&self, writer: &mut BitWriter, definition: &D) -> RegistryResult<()> {
        let code = self.code_of(definition.id_string())?;
        writer.write_bits(code, self.bit_width)?;
        Ok(())
    }

    /// Reads [`bit_width`](Self::bit_width) bits and resolves the code.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Bitstream`] on an exhausted stream and
    /// [`RegistryError::CodeOutOfRange`] for a code with no definition —
    /// both indicate a protocol-version mismatch and are fatal for the
    /// message being decoded.
    pub fn read_from_stream<'a>(&'a self, reader: &mut BitReader<'_>) -> RegistryResult<&'a D> {
        let code = reader.read_bits(self.bit_width)?;
        self.definition_of(code)
    }

    /// Deterministic fingerprint of the registration order.
    ///
    /// Hashes the entry count and every id string in order; any reorder,
    /// insertion, or removal produces a different value. Suitable for
    /// protocol-version handshakes and startup integrity checks.
    #[must_use]
    pub fn hash(&self) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.entries.len() as u32).to_le_bytes());
        for definition in &self.entries {
            let id_string = definition.id_string().as_bytes();
            hasher.update(&(id_string.len() as u32).to_le_bytes());
            hasher.update(id_string);
        }

        let hash = hasher.finalize();
        let bytes = hash.as_bytes();
        u64::from_le_bytes(bytes[0..8].try_into().expect("blake3 output is 32 bytes"))
    }
}
