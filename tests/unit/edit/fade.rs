use super::*;
use crate::foundation::core::Disposal;

#[test]
fn fractions_follow_a_triangular_ramp() {
    assert_eq!(fade_fractions(5, 1.0), vec![1.0, 0.75, 0.5, 0.5, 0.75]);
}

#[test]
fn fractions_clamp_at_zero_and_full() {
    let f = fade_fractions(4, 10.0);
    assert_eq!(f, vec![1.0, 0.0, 0.0, 0.0]);
    assert!(fade_fractions(9, 3.0).iter().all(|&x| (0.0..=1.0).contains(&x)));
}

#[test]
fn zero_rate_keeps_full_weight() {
    assert!(fade_fractions(6, 0.0).iter().all(|&x| x == 1.0));
}

#[test]
fn single_position_never_fades() {
    assert_eq!(fade_fractions(1, 1.0), vec![0.0]);
    assert!(fade_fractions(0, 1.0).is_empty());
}

#[test]
fn channel_blend_truncates_and_clamps() {
    assert_eq!(blend_channel(100, 0, 0.75), 25);
    assert_eq!(blend_channel(200, 255, 0.5), 227);
    assert_eq!(blend_channel(10, 200, 0.0), 10);
    assert_eq!(blend_channel(10, 200, 1.0), 200);
}

#[test]
fn blend_color_preserves_alpha() {
    assert_eq!(blend_color([100, 50, 0, 0], [0, 0, 0], 1.0), [0, 0, 0, 0]);
    assert_eq!(blend_color([0, 0, 0, 255], [255, 255, 255], 0.5), [127, 127, 127, 255]);
}

#[test]
fn apply_fades_each_position_independently() {
    let frame = IndexedFrame::new(1, 1, vec![0], vec![[200, 100, 40, 255]]).unwrap();
    let mut seq = Sequence::from_parts(
        vec![frame.clone(), frame.clone(), frame],
        vec![10; 3],
        vec![Disposal::Keep; 3],
    )
    .unwrap();

    apply(
        &mut seq,
        &Fade {
            color: [0, 0, 0],
            rate: 1.0,
        },
    );

    // len 3: fractions 1.0, 0.5, 0.5
    let palettes: Vec<Rgba8> = seq.frames().map(|f| f.palette[0]).collect();
    assert_eq!(
        palettes,
        vec![[0, 0, 0, 255], [100, 50, 20, 255], [100, 50, 20, 255]]
    );
}
