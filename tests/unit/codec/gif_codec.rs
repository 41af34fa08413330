use super::*;

const RED: Rgba8 = [255, 0, 0, 255];
const CLEAR: Rgba8 = [0, 0, 0, 0];
const BLUE: Rgba8 = [0, 0, 255, 255];

fn sample() -> Animation {
    let a = IndexedFrame::new(2, 2, vec![0, 1, 1, 0], vec![RED, CLEAR]).unwrap();
    let b = IndexedFrame::new(1, 1, vec![0], vec![BLUE, RED])
        .unwrap()
        .at(1, 1);
    Animation {
        width: 2,
        height: 2,
        sequence: Sequence::from_parts(
            vec![a, b],
            vec![7, 12],
            vec![Disposal::Keep, Disposal::Background],
        )
        .unwrap(),
        loop_count: LoopCount::Finite(3),
        background_index: None,
    }
}

fn encoded(anim: &Animation) -> Vec<u8> {
    let mut buf = Vec::new();
    encode(&mut buf, anim).unwrap();
    buf
}

#[test]
fn decode_reads_back_what_encode_wrote() {
    let anim = sample();
    let back = decode(encoded(&anim).as_slice()).unwrap();

    assert_eq!((back.width, back.height), (2, 2));
    assert_eq!(back.loop_count, LoopCount::Finite(3));
    assert_eq!(back.frame_count(), 2);
    assert_eq!(back.sequence.delays().collect::<Vec<_>>(), vec![7, 12]);
    assert_eq!(
        back.sequence.disposals().collect::<Vec<_>>(),
        vec![Disposal::Keep, Disposal::Background]
    );

    let frames: Vec<&IndexedFrame> = back.sequence.frames().collect();
    assert_eq!(frames[0].pixels, vec![0, 1, 1, 0]);
    assert_eq!(frames[0].color_at(0, 0), RED);
    assert_eq!(frames[0].color_at(1, 0)[3], 0);
    assert_eq!((frames[1].left, frames[1].top), (1, 1));
    assert_eq!(frames[1].color_at(0, 0), BLUE);
}

#[test]
fn loop_count_once_and_infinite_survive() {
    for loop_count in [LoopCount::Once, LoopCount::Infinite] {
        let anim = Animation {
            loop_count,
            ..sample()
        };
        let back = decode(encoded(&anim).as_slice()).unwrap();
        assert_eq!(back.loop_count, loop_count);
    }
}

#[test]
fn garbage_input_is_a_codec_error() {
    let err = decode(&b"definitely not a gif"[..]).unwrap_err();
    assert!(matches!(err, LoopError::Codec(_)));
}

#[test]
fn negative_offsets_cannot_be_encoded() {
    let frame = IndexedFrame::new(1, 1, vec![0], vec![RED, BLUE])
        .unwrap()
        .at(-1, 0);
    let anim = Animation {
        sequence: Sequence::from_parts(vec![frame], vec![5], vec![Disposal::Any]).unwrap(),
        ..sample()
    };
    let mut buf = Vec::new();
    assert!(matches!(encode(&mut buf, &anim), Err(LoopError::Codec(_))));
}

#[test]
fn file_helpers_write_and_read() {
    let dir = std::path::PathBuf::from("target").join("unit_gif_codec");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("sample.gif");

    encode_file(&path, &sample()).unwrap();
    let back = decode_file(&path).unwrap();
    assert_eq!(back.frame_count(), 2);

    let missing = decode_file(&dir.join("missing.gif")).unwrap_err();
    assert!(matches!(missing, LoopError::Other(_)));
}
