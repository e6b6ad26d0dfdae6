use bitstream::{BitReader, BitWriter};

#[test]
fn object_update_shaped_sequence_roundtrips() {
    // Shape of a typical partial update: two 16-bit quantized floats,
    // one rotation, a presence flag, and a small enum ordinal.
    let mut writer = BitWriter::new();
    writer.write_float(512.25, 0.0, 1024.0, 16).unwrap();
    writer.write_float(100.5, 0.0, 1024.0, 16).unwrap();
    writer
        .write_float(1.0, -std::f32::consts::PI, std::f32::consts::PI, 16)
        .unwrap();
    writer.write_bool(true);
    writer.write_bits(3, 3).unwrap();
    writer.write_bool(false);
    let bits = writer.bits_written();
    let bytes = writer.finish();

    let mut reader = BitReader::new(&bytes);
    let x = reader.read_float(0.0, 1024.0, 16).unwrap();
    let y = reader.read_float(0.0, 1024.0, 16).unwrap();
    let rot = reader
        .read_float(-std::f32::consts::PI, std::f32::consts::PI, 16)
        .unwrap();
    assert!((x - 512.25).abs() <= 1024.0 / 65_535.0);
    assert!((y - 100.5).abs() <= 1024.0 / 65_535.0);
    assert!((rot - 1.0).abs() <= 2.0 * std::f32::consts::PI / 65_535.0);
    assert!(reader.read_bool().unwrap());
    assert_eq!(reader.read_bits(3).unwrap(), 3);
    assert!(!reader.read_bool().unwrap());
    assert_eq!(reader.bit_position(), bits);
}

#[test]
fn truncated_stream_fails_cleanly_mid_field() {
    let mut writer = BitWriter::new();
    writer.write_bits(0xABCD, 16).unwrap();
    let bytes = writer.finish();

    // Drop the second byte; the 16-bit read must fail, not wrap or pad.
    let mut reader = BitReader::new(&bytes[..1]);
    let err = reader.read_bits(16).unwrap_err();
    assert!(matches!(err, bitstream::BitError::UnexpectedEof { .. }));
}

#[test]
fn padding_bits_are_zero() {
    let mut writer = BitWriter::new();
    writer.write_bool(true);
    writer.write_bits(0, 2).unwrap();
    let bytes = writer.finish();
    assert_eq!(bytes, vec![0b1000_0000]);

    // The padding reads back as zero bits.
    let mut reader = BitReader::new(&bytes);
    reader.read_bits(3).unwrap();
    assert_eq!(reader.read_bits(5).unwrap(), 0);
}

#[test]
fn float_endpoints_are_exact_at_every_width() {
    for bits in 1..=32u8 {
        let mut writer = BitWriter::new();
        writer.write_float(-4.0, -4.0, 4.0, bits).unwrap();
        writer.write_float(4.0, -4.0, 4.0, bits).unwrap();
        let bytes = writer.finish();

        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_float(-4.0, 4.0, bits).unwrap(), -4.0);
        assert_eq!(reader.read_float(-4.0, 4.0, bits).unwrap(), 4.0);
    }
}

#[test]
fn reencoding_decoded_floats_is_bit_exact() {
    let mut writer = BitWriter::new();
    for value in [0.0f32, 0.125, 0.6, 0.99, 1.0] {
        writer.write_float(value, 0.0, 1.0, 8).unwrap();
    }
    let first = writer.finish();

    let mut reader = BitReader::new(&first);
    let mut rewriter = BitWriter::new();
    for _ in 0..5 {
        let value = reader.read_float(0.0, 1.0, 8).unwrap();
        rewriter.write_float(value, 0.0, 1.0, 8).unwrap();
    }
    let second = rewriter.finish();
    assert_eq!(first, second);
}
