//! Bit-level helpers for 8-bit pixel masks.
//!
//! Bit `k` of a mask stands for physical pixel `k`. Masks typed by the user are written with
//! logical pixel 0 as the most-significant bit, so [`swap_bits`] translates them when the strip
//! is numbered left to right.

/// Mask with every pixel selected.
pub const ALL_PIXELS: u8 = 0xFF;

/// Reverse the bit order of a byte: bit `i` swaps with bit `7 - i`.
///
/// ```
/// use blinkt::mask::swap_bits;
///
/// assert_eq!(swap_bits(0b1000_0000), 0b0000_0001);
/// assert_eq!(swap_bits(0b1100_1010), 0b0101_0011);
/// ```
#[must_use]
pub const fn swap_bits(mask: u8) -> u8 {
    mask.reverse_bits()
}

/// Whether physical pixel `index` is set in `mask`. Indexes past 7 are never set.
#[must_use]
pub const fn is_set(mask: u8, index: usize) -> bool {
    index < 8 && mask & (1 << index) != 0
}

/// Translate a user-supplied mask into physical bit order.
#[must_use]
pub const fn to_physical(mask: u8, left_to_right: bool) -> u8 {
    if left_to_right { swap_bits(mask) } else { mask }
}

/// Rotate each 4-pixel half of the mask one step toward the middle of the strip.
///
/// The high nibble (pixels 4–7) rotates down, the low nibble (pixels 0–3) rotates up.
#[must_use]
pub const fn rotate_in(mask: u8) -> u8 {
    let (left, right) = split_nibbles(mask);
    join_nibbles(rotate_nibble_right(left), rotate_nibble_left(right))
}

/// Rotate each 4-pixel half of the mask one step toward the ends of the strip.
///
/// Inverse of [`rotate_in`].
#[must_use]
pub const fn rotate_out(mask: u8) -> u8 {
    let (left, right) = split_nibbles(mask);
    join_nibbles(rotate_nibble_left(left), rotate_nibble_right(right))
}

/// Rotate the whole mask one bit toward the most-significant end.
#[must_use]
pub const fn rotate_left(mask: u8) -> u8 {
    mask.rotate_left(1)
}

/// Rotate the whole mask one bit toward the least-significant end.
#[must_use]
pub const fn rotate_right(mask: u8) -> u8 {
    mask.rotate_right(1)
}

const fn split_nibbles(mask: u8) -> (u8, u8) {
    (mask >> 4, mask & 0x0F)
}

const fn join_nibbles(high: u8, low: u8) -> u8 {
    (high << 4) | (low & 0x0F)
}

const fn rotate_nibble_left(nibble: u8) -> u8 {
    ((nibble << 1) | (nibble >> 3)) & 0x0F
}

const fn rotate_nibble_right(nibble: u8) -> u8 {
    ((nibble >> 1) | (nibble << 3)) & 0x0F
}
