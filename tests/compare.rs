//! Comparison outputs are masks: all-one bits for true, all-zero for false.

use packed64::ops;

#[test]
fn cmpeq_pi32_yields_full_masks() {
    let a = ops::setr_pi32(5, 5);
    let b = ops::setr_pi32(5, 6);

    assert_eq!(ops::cmpeq_pi32(a, b).to_u32(), [0xffff_ffff, 0x0000_0000]);
}

#[test]
fn cmpeq_masks_per_lane_width() {
    let a = ops::setr_pi8(1, 2, 3, 4, 5, 6, 7, 8);
    let b = ops::setr_pi8(1, 0, 3, 0, 5, 0, 7, 0);

    assert_eq!(
        ops::cmpeq_pi8(a, b).to_u8(),
        [0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00],
    );

    let a = ops::setr_pi16(-7, 0, 7, i16::MIN);
    let b = ops::setr_pi16(-7, 1, 7, i16::MAX);

    assert_eq!(ops::cmpeq_pi16(a, b).to_u16(), [0xffff, 0, 0xffff, 0]);
}

#[test]
fn cmpgt_is_signed() {
    // As unsigned bytes 0x80 > 0x01, but the compare is signed.
    let a = ops::set1_pi8(i8::MIN);
    let b = ops::set1_pi8(1);

    assert_eq!(ops::cmpgt_pi8(a, b).to_u8(), [0x00; 8]);
    assert_eq!(ops::cmpgt_pi8(b, a).to_u8(), [0xff; 8]);

    let a = ops::setr_pi32(-1, 1);
    let b = ops::setr_pi32(0, 0);

    assert_eq!(ops::cmpgt_pi32(a, b).to_u32(), [0x0000_0000, 0xffff_ffff]);
    assert_eq!(ops::cmpgt_pi16(ops::set1_pi16(-5), ops::set1_pi16(-6)).to_u16(), [0xffff; 4]);
}

#[test]
fn equal_lanes_are_not_greater() {
    let a = ops::set1_pi16(42);

    assert_eq!(ops::cmpgt_pi16(a, a).to_u64(), 0);
    assert_eq!(ops::cmpeq_pi16(a, a).to_u64(), u64::MAX);
}

#[test]
fn masks_compose_with_bitwise_select() {
    // The classic mask use: select lanes of a where a > b, else lanes of b.
    let a = ops::setr_pi16(10, -20, 30, -40);
    let b = ops::setr_pi16(-10, 20, -30, 40);

    let mask = ops::cmpgt_pi16(a, b);
    let max = ops::or_si64(ops::and_si64(mask, a), ops::andnot_si64(mask, b));

    assert_eq!(max.to_i16(), [10, 20, 30, 40]);
}
