//! End-to-end codec scenarios, including non-standard registry sets and
//! multi-object streams.

use bitstream::{BitReader, BitWriter};
use codec::{
    LootCodec, LootFull, LootPartial, ObjectCodec, ObstacleCodec, ObstaclePartial, PlayerAction,
    PlayerCodec, PlayerPartial, Vec2,
};
use defs::{
    standard_registries, GameRegistries, LootDefinition, LootKind, Registry,
};

fn loot_def(id_string: &'static str) -> LootDefinition {
    LootDefinition {
        id_string,
        name: id_string,
        kind: LootKind::Healing,
    }
}

/// Standard registries with the loot table swapped for `ids`.
fn with_loots(ids: &[&'static str]) -> GameRegistries {
    let mut registries = standard_registries().clone();
    registries.loots = Registry::new(ids.iter().copied().map(loot_def).collect()).unwrap();
    registries
}

#[test]
fn loot_full_roundtrip_in_a_six_entry_registry() {
    // Six entries need 3 bits; "basic_vest" sits at code 3.
    let registries = with_loots(&[
        "basic_helmet",
        "regular_helmet",
        "tactical_helmet",
        "basic_vest",
        "regular_vest",
        "tactical_vest",
    ]);
    assert_eq!(registries.loots.bit_width(), 3);
    assert_eq!(registries.loots.code_of("basic_vest").unwrap(), 3);

    let state = LootFull {
        partial: LootPartial {
            position: Vec2::new(10.5, 20.25),
        },
        definition: registries.loots.definition_of(3).unwrap().clone(),
        count: 12,
        is_new: true,
    };

    let mut writer = BitWriter::new();
    LootCodec::serialize_full(&registries, &mut writer, &state).unwrap();
    // position (32) + code (3) + count (9) + is_new (1)
    assert_eq!(writer.bits_written(), 45);
    let bytes = writer.finish();

    let mut reader = BitReader::new(&bytes);
    let decoded = LootCodec::deserialize_full(&registries, &mut reader).unwrap();
    assert_eq!(decoded.definition.id_string, "basic_vest");
    assert_eq!(decoded.count, 12);
    assert!(decoded.is_new);
    assert!((decoded.partial.position.x - 10.5).abs() < 0.02);
    assert!((decoded.partial.position.y - 20.25).abs() < 0.02);
}

#[test]
fn use_item_width_follows_the_registry_size() {
    // Ten entries need 4 bits.
    let registries = with_loots(&[
        "i0", "i1", "i2", "i3", "i4", "i5", "i6", "i7", "i8", "i9",
    ]);
    assert_eq!(registries.loots.bit_width(), 4);

    let base = PlayerPartial {
        position: Vec2::new(50.0, 50.0),
        rotation: 0.5,
        animation: None,
        action: Some(PlayerAction::Reload),
    };

    let mut writer = BitWriter::new();
    PlayerCodec::serialize_partial(&registries, &mut writer, &base).unwrap();
    let reload_bits = writer.bits_written();

    let use_item = PlayerPartial {
        action: Some(PlayerAction::UseItem {
            item: registries.loots.definition_of(6).unwrap().clone(),
        }),
        ..base
    };
    let mut writer = BitWriter::new();
    PlayerCodec::serialize_partial(&registries, &mut writer, &use_item).unwrap();
    let use_bits = writer.bits_written();

    // Reload writes the action kind only; use-item appends one loot code.
    assert_eq!(use_bits - reload_bits, 4);

    let bytes = writer.finish();
    let mut reader = BitReader::new(&bytes);
    let decoded = PlayerCodec::deserialize_partial(&registries, &mut reader).unwrap();
    assert_eq!(decoded.action, use_item.action);
}

#[test]
fn sender_and_receiver_must_share_one_registry_set() {
    let six = with_loots(&["a", "b", "c", "d", "e", "f"]);
    let five = with_loots(&["a", "b", "c", "d", "e"]);

    let state = LootFull {
        partial: LootPartial {
            position: Vec2::new(1.0, 1.0),
        },
        definition: six.loots.definition_of(5).unwrap().clone(),
        count: 1,
        is_new: false,
    };

    let mut writer = BitWriter::new();
    LootCodec::serialize_full(&six, &mut writer, &state).unwrap();
    let bytes = writer.finish();

    // Five entries read 3 bits too, but code 5 has no definition.
    let mut reader = BitReader::new(&bytes);
    assert!(LootCodec::deserialize_full(&five, &mut reader).is_err());
}

#[test]
fn mixed_categories_share_one_stream_without_drift() {
    let registries = standard_registries();

    let player = PlayerPartial {
        position: Vec2::new(10.0, 20.0),
        rotation: 1.0,
        animation: None,
        action: None,
    };
    let obstacle = ObstaclePartial {
        scale: 1.5,
        dead: false,
    };
    let loot = LootPartial {
        position: Vec2::new(30.0, 40.0),
    };

    let mut writer = BitWriter::new();
    PlayerCodec::serialize_partial(registries, &mut writer, &player).unwrap();
    ObstacleCodec::serialize_partial(registries, &mut writer, &obstacle).unwrap();
    LootCodec::serialize_partial(registries, &mut writer, &loot).unwrap();
    let total_bits = writer.bits_written();
    let bytes = writer.finish();

    let mut reader = BitReader::new(&bytes);
    let p = PlayerCodec::deserialize_partial(registries, &mut reader).unwrap();
    let o = ObstacleCodec::deserialize_partial(registries, &mut reader).unwrap();
    let l = LootCodec::deserialize_partial(registries, &mut reader).unwrap();

    // Every payload ends exactly where the next begins.
    assert_eq!(reader.bit_position(), total_bits);
    assert!((p.position.x - 10.0).abs() < 0.02);
    assert!(!o.dead);
    assert!((l.position.y - 40.0).abs() < 0.02);
}
