use super::*;

#[test]
fn wrap_matches_floor_definition() {
    assert_eq!(wrap(7, 5), 2);
    assert_eq!(wrap(5, 5), 0);
    assert_eq!(wrap(0, 5), 0);
    assert_eq!(wrap(-1, 5), 4);
    assert_eq!(wrap(-5, 5), 0);
    assert_eq!(wrap(-6, 5), 4);
}

#[test]
fn wrap_takes_the_sign_of_the_divisor() {
    assert_eq!(wrap(7, -5), -3);
    assert_eq!(wrap(-7, -5), -2);
    assert_eq!(wrap(10, -5), 0);
}

#[test]
fn wrap_index_never_leaves_range() {
    for a in -20i64..20 {
        let i = wrap_index(a, 7);
        assert!(i < 7, "{a} wrapped to {i}");
        assert_eq!((i as i64 - a).rem_euclid(7), 0);
    }
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn wrap_handles_extreme_offsets() {
    assert_eq!(wrap(i64::MAX, 3), i64::MAX.rem_euclid(3));
    assert_eq!(wrap(i64::MIN, 3), i64::MIN.rem_euclid(3));
    assert_eq!(wrap(i64::MIN, -1), 0);
    assert!(wrap_index(i64::MIN, 7) < 7);
}
