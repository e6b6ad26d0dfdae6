//! Core value types carried by object state.

use defs::RotationMode;

/// A 2D world position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A compact reference to a live object, used where a full definition
/// would be wasteful (e.g. the player a death marker points at).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ObjectId(u16);

impl ObjectId {
    /// Creates a new object ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for ObjectId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl From<ObjectId> for u16 {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

/// A rotation value tagged by its wire encoding.
///
/// The variant must agree with the owning definition's declared
/// [`RotationMode`]; the obstacle and decal codecs enforce this before
/// writing and derive the variant from the decoded definition when reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleRotation {
    /// Free rotation in radians, 16 bits over `[-π, π]`.
    Full(f32),
    /// One of four cardinal orientations, 2 bits.
    Limited(u8),
    /// One of two orientations, 1 bit.
    Binary(bool),
    /// No rotation on the wire.
    None,
}

impl ObstacleRotation {
    /// The wire mode this value encodes as.
    #[must_use]
    pub const fn mode(&self) -> RotationMode {
        match self {
            Self::Full(_) => RotationMode::Full,
            Self::Limited(_) => RotationMode::Limited,
            Self::Binary(_) => RotationMode::Binary,
            Self::None => RotationMode::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_construction() {
        let v = Vec2::new(10.5, 20.25);
        assert_eq!(v.x, 10.5);
        assert_eq!(v.y, 20.25);
        assert_eq!(Vec2::default(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn object_id_conversions() {
        let id = ObjectId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(ObjectId::from(42u16), id);
        assert_eq!(u16::from(id), 42);
    }

    #[test]
    fn object_id_is_hashable_and_ordered() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ObjectId::new(1));
        set.insert(ObjectId::new(2));
        set.insert(ObjectId::new(1));
        assert_eq!(set.len(), 2);
        assert!(ObjectId::new(1) < ObjectId::new(2));
    }

    #[test]
    fn rotation_variant_reports_its_mode() {
        assert_eq!(ObstacleRotation::Full(1.0).mode(), RotationMode::Full);
        assert_eq!(ObstacleRotation::Limited(2).mode(), RotationMode::Limited);
        assert_eq!(ObstacleRotation::Binary(true).mode(), RotationMode::Binary);
        assert_eq!(ObstacleRotation::None.mode(), RotationMode::None);
    }
}
