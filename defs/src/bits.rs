//! Bit-width computation for closed enumerations.

/// Returns the number of bits needed to encode any ordinal of an enumeration
/// with `member_count` members: `ceil(log2(member_count))`, minimum 1.
///
/// Intended to be evaluated once per enumeration in a `const` item, so the
/// cost is paid at compile time rather than per message:
///
/// ```
/// use defs::enum_bits;
///
/// enum ActionKind { None, Reload, Revive, UseItem }
/// const ACTION_BITS: u8 = enum_bits(4);
/// assert_eq!(ACTION_BITS, 2);
/// ```
///
/// # Panics
///
/// Panics (a compile error in const context) on a zero-member enumeration,
/// which has no representable ordinals.
#[must_use]
pub const fn enum_bits(member_count: usize) -> u8 {
    assert!(member_count > 0, "enumeration must have at least one member");
    let mut bits: u8 = 1;
    while (1usize << bits) < member_count {
        bits += 1;
    }
    bits
}
