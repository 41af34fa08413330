use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LoopError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        LoopError::insufficient_frames("x")
            .to_string()
            .contains("insufficient frames:")
    );
    assert!(LoopError::codec("x").to_string().contains("codec error:"));
    assert!(
        LoopError::quantization("x")
            .to_string()
            .contains("quantization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LoopError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn codec_errors_keep_the_codec_message() {
    let base = gif::DecodingError::Io(std::io::Error::other("truncated stream"));
    let err = LoopError::from(base);
    assert!(matches!(err, LoopError::Codec(_)));
    assert!(err.to_string().contains("truncated stream"));
}
