use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn numbered(n: u32) -> Sequence<u32> {
    let frames: Vec<u32> = (0..n).collect();
    let delays = (0..n).map(|i| 10 + i as u16).collect();
    let disposals = vec![Disposal::Keep; n as usize];
    Sequence::from_parts(frames, delays, disposals).unwrap()
}

fn frame_ids(seq: &Sequence<u32>) -> Vec<u32> {
    seq.frames().copied().collect()
}

#[test]
fn from_parts_rejects_misaligned_lists() {
    let err = Sequence::from_parts(vec![1u8, 2], vec![10], vec![Disposal::Any; 2]).unwrap_err();
    assert!(matches!(err, LoopError::Codec(_)));
}

#[test]
fn empty_sequences_are_rejected() {
    let err = Sequence::<u8>::new(Vec::new()).unwrap_err();
    assert!(matches!(err, LoopError::InsufficientFrames(_)));
}

#[test]
fn parts_survive_a_round_trip() {
    let seq = numbered(3);
    let (frames, delays, disposals) = seq.into_parts();
    assert_eq!(frames, vec![0, 1, 2]);
    assert_eq!(delays, vec![10, 11, 12]);
    assert_eq!(disposals, vec![Disposal::Keep; 3]);
}

#[test]
fn reverse_is_an_involution() {
    for n in 1..6 {
        let original = numbered(n);
        let mut seq = original.clone();
        seq.reverse();
        seq.reverse();
        assert_eq!(seq, original);
    }
}

#[test]
fn reverse_keeps_delays_with_their_frames() {
    let mut seq = numbered(4);
    seq.reverse();
    assert_eq!(frame_ids(&seq), vec![3, 2, 1, 0]);
    assert_eq!(seq.delays().collect::<Vec<_>>(), vec![13, 12, 11, 10]);
}

#[test]
fn shuffle_preserves_the_multiset_of_cels() {
    let seq = numbered(16);
    let mut shuffled = seq.clone();
    shuffled.shuffle(&mut StdRng::seed_from_u64(7));

    assert_eq!(shuffled.len(), seq.len());
    let mut ids = frame_ids(&shuffled);
    ids.sort_unstable();
    assert_eq!(ids, frame_ids(&seq));

    for cel in shuffled.cels() {
        assert_eq!(cel.delay, 10 + cel.frame as u16);
    }
}

#[test]
fn select_clones_repeated_positions() {
    let seq = numbered(3);
    let picked = seq.select(&[0, 1, 2, 1, 0]).unwrap();
    assert_eq!(frame_ids(&picked), vec![0, 1, 2, 1, 0]);
    assert!(seq.select(&[3]).is_err());
}
