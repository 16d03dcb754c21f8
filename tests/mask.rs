#![allow(missing_docs)]
//! Host-level tests for mask bit twiddling.

use blinkt::mask::{
    ALL_PIXELS, is_set, rotate_in, rotate_left, rotate_out, rotate_right, swap_bits, to_physical,
};

#[test]
fn swap_bits_is_an_involution() {
    for mask in 0..=u8::MAX {
        assert_eq!(swap_bits(swap_bits(mask)), mask);
    }
}

#[test]
fn swap_bits_mirrors_positions() {
    assert_eq!(swap_bits(0b1000_0000), 0b0000_0001);
    assert_eq!(swap_bits(0b0000_1111), 0b1111_0000);
    assert_eq!(swap_bits(ALL_PIXELS), ALL_PIXELS);
}

#[test]
fn to_physical_only_swaps_left_to_right() {
    assert_eq!(to_physical(0b1100_0000, true), 0b0000_0011);
    assert_eq!(to_physical(0b1100_0000, false), 0b1100_0000);
}

#[test]
fn is_set_reads_physical_index() {
    assert!(is_set(0b0000_0001, 0));
    assert!(!is_set(0b0000_0001, 1));
    assert!(is_set(0b1000_0000, 7));
    assert!(!is_set(ALL_PIXELS, 8));
}

#[test]
fn rotate_in_moves_each_half_toward_the_middle() {
    // Low nibble rotates up, high nibble rotates down.
    assert_eq!(rotate_in(0b0000_0001), 0b0000_0010);
    assert_eq!(rotate_in(0b0000_1000), 0b0000_0001);
    assert_eq!(rotate_in(0b1000_0000), 0b0100_0000);
    assert_eq!(rotate_in(0b0001_0000), 0b1000_0000);
}

#[test]
fn rotate_out_moves_each_half_toward_the_ends() {
    assert_eq!(rotate_out(0b0000_0010), 0b0000_0001);
    assert_eq!(rotate_out(0b0000_0001), 0b0000_1000);
    assert_eq!(rotate_out(0b0100_0000), 0b1000_0000);
    assert_eq!(rotate_out(0b1000_0000), 0b0001_0000);
}

#[test]
fn rotations_are_inverse_pairs() {
    for mask in 0..=u8::MAX {
        assert_eq!(rotate_out(rotate_in(mask)), mask);
        assert_eq!(rotate_in(rotate_out(mask)), mask);
        assert_eq!(rotate_right(rotate_left(mask)), mask);
        assert_eq!(rotate_left(rotate_right(mask)), mask);
    }
}

#[test]
fn full_rotation_wraps_the_top_bit() {
    assert_eq!(rotate_left(0b1000_0001), 0b0000_0011);
    assert_eq!(rotate_right(0b1000_0001), 0b1100_0000);
}
