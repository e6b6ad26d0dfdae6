//! Player state serialization.

use bitstream::{BitReader, BitWriter};
use defs::{
    enum_bits, ArmorDefinition, BackpackDefinition, GameRegistries, LootDefinition,
    SkinDefinition,
};

use crate::error::{CodecError, CodecResult};
use crate::objects::ObjectCodec;
use crate::stream::{ReadGamePrimitives, WriteGamePrimitives, ROTATION_BITS};
use crate::types::Vec2;

/// One-shot animation currently playing on a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    None,
    Melee,
    GunFire,
    GunClick,
    LastShot,
    Revive,
}

impl AnimationKind {
    pub const COUNT: usize = 6;
    /// Field width, computed once per enumeration.
    pub const BITS: u8 = enum_bits(Self::COUNT);

    const ALL: [Self; Self::COUNT] = [
        Self::None,
        Self::Melee,
        Self::GunFire,
        Self::GunClick,
        Self::LastShot,
        Self::Revive,
    ];

    #[must_use]
    pub const fn ordinal(self) -> u64 {
        self as u64
    }

    #[must_use]
    pub fn from_ordinal(ordinal: u64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

/// The action a player is performing.
///
/// A union discriminated by the action kind: only `UseItem` carries a
/// payload, so an item-less use action is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    None,
    Reload,
    Revive,
    UseItem { item: LootDefinition },
}

impl PlayerAction {
    pub const KIND_COUNT: usize = 4;
    /// Width of the action-kind field.
    pub const BITS: u8 = enum_bits(Self::KIND_COUNT);

    #[must_use]
    pub const fn kind_ordinal(&self) -> u64 {
        match self {
            Self::None => 0,
            Self::Reload => 1,
            Self::Revive => 2,
            Self::UseItem { .. } => 3,
        }
    }
}

/// Fields resent on every player update.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPartial {
    pub position: Vec2,
    pub rotation: f32,
    /// Present only on the tick the animation starts.
    pub animation: Option<AnimationKind>,
    /// Present only on the tick the action changes.
    pub action: Option<PlayerAction>,
}

/// Partial fields plus the state sent when a player first becomes visible.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerFull {
    pub partial: PlayerPartial,
    pub dead: bool,
    pub invulnerable: bool,
    pub active_item: LootDefinition,
    pub skin: SkinDefinition,
    pub backpack: BackpackDefinition,
    pub helmet: Option<ArmorDefinition>,
    pub vest: Option<ArmorDefinition>,
}

pub struct PlayerCodec;

impl ObjectCodec for PlayerCodec {
    type Partial = PlayerPartial;
    type Full = PlayerFull;

    fn serialize_partial(
        registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Partial,
    ) -> CodecResult<()> {
        writer.write_position(state.position)?;
        writer.write_rotation(state.rotation, ROTATION_BITS)?;

        writer.write_bool(state.animation.is_some());
        if let Some(animation) = state.animation {
            writer.write_bits(animation.ordinal(), AnimationKind::BITS)?;
        }

        writer.write_bool(state.action.is_some());
        if let Some(action) = &state.action {
            writer.write_bits(action.kind_ordinal(), PlayerAction::BITS)?;
            if let PlayerAction::UseItem { item } = action {
                registries.loots.write_to_stream(writer, item)?;
            }
        }
        Ok(())
    }

    fn serialize_full(
        registries: &GameRegistries,
        writer: &mut BitWriter,
        state: &Self::Full,
    ) -> CodecResult<()> {
        Self::serialize_partial(registries, writer, &state.partial)?;

        writer.write_bool(state.dead);
        writer.write_bool(state.invulnerable);
        registries.loots.write_to_stream(writer, &state.active_item)?;
        registries.skins.write_to_stream(writer, &state.skin)?;
        registries.backpacks.write_to_stream(writer, &state.backpack)?;

        writer.write_bool(state.helmet.is_some());
        if let Some(helmet) = &state.helmet {
            registries.armors.write_to_stream(writer, helmet)?;
        }
        writer.write_bool(state.vest.is_some());
        if let Some(vest) = &state.vest {
            registries.armors.write_to_stream(writer, vest)?;
        }
        Ok(())
    }

    fn deserialize_partial(
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Partial> {
        let position = reader.read_position()?;
        let rotation = reader.read_rotation(ROTATION_BITS)?;

        let animation = if reader.read_bool()? {
            let ordinal = reader.read_bits(AnimationKind::BITS)?;
            Some(
                AnimationKind::from_ordinal(ordinal).ok_or(CodecError::InvalidEnumValue {
                    enumeration: "AnimationKind",
                    value: ordinal,
                })?,
            )
        } else {
            None
        };

        let action = if reader.read_bool()? {
            let kind = reader.read_bits(PlayerAction::BITS)?;
            Some(match kind {
                0 => PlayerAction::None,
                1 => PlayerAction::Reload,
                2 => PlayerAction::Revive,
                3 => PlayerAction::UseItem {
                    item: registries.loots.read_from_stream(reader)?.clone(),
                },
                value => {
                    return Err(CodecError::InvalidEnumValue {
                        enumeration: "PlayerAction",
                        value,
                    })
                }
            })
        } else {
            None
        };

        Ok(PlayerPartial {
            position,
            rotation,
            animation,
            action,
        })
    }

    fn deserialize_full(
        registries: &GameRegistries,
        reader: &mut BitReader<'_>,
    ) -> CodecResult<Self::Full> {
        let partial = Self::deserialize_partial(registries, reader)?;

        let dead = reader.read_bool()?;
        let invulnerable = reader.read_bool()?;
        let active_item = registries.loots.read_from_stream(reader)?.clone();
        let skin = registries.skins.read_from_stream(reader)?.clone();
        let backpack = registries.backpacks.read_from_stream(reader)?.clone();

        let helmet = if reader.read_bool()? {
            Some(registries.armors.read_from_stream(reader)?.clone())
        } else {
            None
        };
        let vest = if reader.read_bool()? {
            Some(registries.armors.read_from_stream(reader)?.clone())
        } else {
            None
        };

        Ok(PlayerFull {
            partial,
            dead,
            invulnerable,
            active_item,
            skin,
            backpack,
            helmet,
            vest,
        })
    }
}
