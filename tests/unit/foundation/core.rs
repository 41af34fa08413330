use super::*;

#[test]
fn loop_count_flag_convention() {
    assert_eq!(LoopCount::from_flag(-1).unwrap(), LoopCount::Once);
    assert_eq!(LoopCount::from_flag(0).unwrap(), LoopCount::Infinite);
    assert_eq!(LoopCount::from_flag(3).unwrap(), LoopCount::Finite(3));
    assert_eq!(LoopCount::Finite(3).as_flag(), 3);
    assert_eq!(LoopCount::Once.as_flag(), -1);
}

#[test]
fn loop_count_rejects_out_of_range() {
    assert!(matches!(
        LoopCount::from_flag(-2),
        Err(LoopError::Configuration(_))
    ));
    assert!(matches!(
        LoopCount::from_flag(i64::from(u16::MAX) + 1),
        Err(LoopError::Configuration(_))
    ));
}

#[test]
fn disposal_maps_gif_methods_both_ways() {
    for d in [
        Disposal::Any,
        Disposal::Keep,
        Disposal::Background,
        Disposal::Previous,
    ] {
        let method: gif::DisposalMethod = d.into();
        assert_eq!(Disposal::from(method), d);
    }
}

#[test]
fn bounds_union_keeps_negative_origins() {
    let a = Bounds::new(0, 0, 4, 4);
    let b = Bounds::new(-2, 1, 3, 5);
    let u = a.union(b);
    assert_eq!(u.min_x, -2);
    assert_eq!(u.min_y, 0);
    assert_eq!(u.width(), 6);
    assert_eq!(u.height(), 6);
}

#[test]
fn default_bounds_have_zero_size() {
    let b = Bounds::default();
    assert_eq!((b.width(), b.height()), (0, 0));
}
