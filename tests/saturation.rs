//! Saturation boundary behavior, and the wrap-vs-saturate distinction.

use packed64::ops;

#[test]
fn adds_i8_clamps_at_both_ends() {
    let max = ops::set1_pi8(i8::MAX);
    let min = ops::set1_pi8(i8::MIN);
    let one = ops::set1_pi8(1);
    let neg_one = ops::set1_pi8(-1);

    assert_eq!(ops::adds_pi8(max, one).to_i8(), [i8::MAX; 8]);
    assert_eq!(ops::adds_pi8(min, neg_one).to_i8(), [i8::MIN; 8]);
}

#[test]
fn adds_u8_clamps_at_255() {
    let max = ops::set1_pi8(-1); // 0xff lanes
    let one = ops::set1_pi8(1);

    assert_eq!(ops::adds_pu8(max, one).to_u8(), [u8::MAX; 8]);
}

#[test]
fn subs_u8_clamps_at_zero() {
    let zero = ops::setzero_si64();
    let one = ops::set1_pi8(1);

    assert_eq!(ops::subs_pu8(zero, one).to_u8(), [0; 8]);
}

#[test]
fn adds_i16_clamps_at_both_ends() {
    let max = ops::set1_pi16(i16::MAX);
    let min = ops::set1_pi16(i16::MIN);
    let one = ops::set1_pi16(1);

    assert_eq!(ops::adds_pi16(max, one).to_i16(), [i16::MAX; 4]);
    assert_eq!(ops::adds_pi16(min, ops::set1_pi16(-1)).to_i16(), [i16::MIN; 4]);
    assert_eq!(ops::subs_pi16(min, one).to_i16(), [i16::MIN; 4]);
    assert_eq!(ops::subs_pi16(max, ops::set1_pi16(-1)).to_i16(), [i16::MAX; 4]);
}

#[test]
fn adds_u16_clamps_at_both_ends() {
    let max = ops::set_pu16(u16::MAX, u16::MAX, u16::MAX, u16::MAX);
    let one = ops::set1_pi16(1);

    assert_eq!(ops::adds_pu16(max, one).to_u16(), [u16::MAX; 4]);
    assert_eq!(ops::subs_pu16(ops::setzero_si64(), one).to_u16(), [0; 4]);
}

#[test]
fn subs_i8_clamps_at_both_ends() {
    let min = ops::set1_pi8(i8::MIN);
    let max = ops::set1_pi8(i8::MAX);
    let one = ops::set1_pi8(1);
    let neg_one = ops::set1_pi8(-1);

    assert_eq!(ops::subs_pi8(min, one).to_i8(), [i8::MIN; 8]);
    assert_eq!(ops::subs_pi8(max, neg_one).to_i8(), [i8::MAX; 8]);
}

// Same inputs, different operations, different outputs: the wrapping forms
// must wrap where the saturating forms clamp.
#[test]
fn wrap_and_saturate_diverge_on_overflow() {
    let max = ops::set1_pi8(i8::MAX);
    let one = ops::set1_pi8(1);

    assert_eq!(ops::add_pi8(max, one).to_i8(), [i8::MIN; 8]);
    assert_eq!(ops::adds_pi8(max, one).to_i8(), [i8::MAX; 8]);

    let max16 = ops::set1_pi16(i16::MAX);
    let one16 = ops::set1_pi16(1);

    assert_eq!(ops::add_pi16(max16, one16).to_i16(), [i16::MIN; 4]);
    assert_eq!(ops::adds_pi16(max16, one16).to_i16(), [i16::MAX; 4]);
}

#[test]
fn wrapping_arithmetic_is_modular() {
    let a = ops::set1_pi32(i32::MAX);
    let b = ops::set1_pi32(2);

    assert_eq!(ops::add_pi32(a, b).to_i32(), [i32::MIN + 1; 2]);
    assert_eq!(ops::sub_pi32(ops::set1_pi32(i32::MIN), b).to_i32(), [i32::MAX - 1; 2]);
}

#[test]
fn mixed_lanes_saturate_independently() {
    let a = ops::setr_pi16(30000, -30000, 100, 0);
    let b = ops::setr_pi16(10000, -10000, -50, -1);

    assert_eq!(
        ops::adds_pi16(a, b).to_i16(),
        [i16::MAX, i16::MIN, 50, -1],
    );
}
