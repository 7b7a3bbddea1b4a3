//! Narrowing packs and widening interleaves.

use packed64::ops;

#[test]
fn packs_pi16_clamps_both_directions() {
    let a = ops::setr_pi16(300, -300, 127, -128);
    let b = ops::setr_pi16(0, 1, -1, 32767);

    assert_eq!(
        ops::packs_pi16(a, b).to_i8(),
        [127, -128, 127, -128, 0, 1, -1, 127],
    );
}

#[test]
fn packs_pi32_clamps_to_i16_range() {
    let a = ops::setr_pi32(100_000, -100_000);
    let b = ops::setr_pi32(12345, -1);

    assert_eq!(
        ops::packs_pi32(a, b).to_i16(),
        [i16::MAX, i16::MIN, 12345, -1],
    );
}

#[test]
fn packs_pu16_clamps_signed_input_to_byte_range() {
    let a = ops::setr_pi16(-5, 0, 255, 256);
    let b = ops::setr_pi16(300, -32768, 1, 254);

    assert_eq!(
        ops::packs_pu16(a, b).to_u8(),
        [0, 0, 255, 255, 255, 0, 1, 254],
    );
}

#[test]
fn pack_orders_first_input_before_second() {
    let a = ops::set1_pi16(1);
    let b = ops::set1_pi16(2);

    assert_eq!(ops::packs_pi16(a, b).to_i8(), [1, 1, 1, 1, 2, 2, 2, 2]);
}

#[test]
fn unpacklo_interleaves_low_halves() {
    let a = ops::setr_pi8(0, 1, 2, 3, 4, 5, 6, 7);
    let b = ops::setr_pi8(10, 11, 12, 13, 14, 15, 16, 17);

    assert_eq!(
        ops::unpacklo_pi8(a, b).to_i8(),
        [0, 10, 1, 11, 2, 12, 3, 13],
    );

    let a = ops::setr_pi16(0, 1, 2, 3);
    let b = ops::setr_pi16(10, 11, 12, 13);

    assert_eq!(ops::unpacklo_pi16(a, b).to_i16(), [0, 10, 1, 11]);
    assert_eq!(
        ops::unpacklo_pi32(ops::setr_pi32(0, 1), ops::setr_pi32(10, 11)).to_i32(),
        [0, 10],
    );
}

#[test]
fn unpackhi_interleaves_high_halves() {
    let a = ops::setr_pi8(0, 1, 2, 3, 4, 5, 6, 7);
    let b = ops::setr_pi8(10, 11, 12, 13, 14, 15, 16, 17);

    assert_eq!(
        ops::unpackhi_pi8(a, b).to_i8(),
        [4, 14, 5, 15, 6, 16, 7, 17],
    );

    let a = ops::setr_pi16(0, 1, 2, 3);
    let b = ops::setr_pi16(10, 11, 12, 13);

    assert_eq!(ops::unpackhi_pi16(a, b).to_i16(), [2, 12, 3, 13]);
    assert_eq!(
        ops::unpackhi_pi32(ops::setr_pi32(0, 1), ops::setr_pi32(10, 11)).to_i32(),
        [1, 11],
    );
}

#[test]
fn widen_then_pack_round_trips_in_range_bytes() {
    // unpacklo against zero widens bytes to words (for non-negative
    // values); packing the two halves back restores the original lanes.
    let x = ops::setr_pi8(1, 2, 3, 4, 5, 6, 7, 8);
    let zero = ops::setzero_si64();

    let lo_words = ops::unpacklo_pi8(x, zero);
    let hi_words = ops::unpackhi_pi8(x, zero);

    assert_eq!(lo_words.to_i16(), [1, 2, 3, 4]);
    assert_eq!(hi_words.to_i16(), [5, 6, 7, 8]);
    assert_eq!(ops::packs_pi16(lo_words, hi_words), x);
}
