use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Disposal, LoopCount, Rgba8};
use crate::foundation::error::{LoopError, LoopResult};
use crate::sequence::animation::Animation;
use crate::sequence::cel::Sequence;
use crate::sequence::frame::IndexedFrame;

fn rgb_palette(bytes: &[u8]) -> Vec<Rgba8> {
    bytes
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2], 255])
        .collect()
}

/// Decode every frame of a GIF stream as palette indices.
pub fn decode<R: Read>(reader: R) -> LoopResult<Animation> {
    let mut options = ::gif::DecodeOptions::new();
    options.set_color_output(::gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(reader)?;

    let global_palette = decoder.global_palette().map(rgb_palette);
    let background_index = decoder.bg_color().and_then(|i| u8::try_from(i).ok());
    let (width, height) = (decoder.width(), decoder.height());

    let mut frames = Vec::new();
    let mut delays = Vec::new();
    let mut disposals = Vec::new();

    while let Some(frame) = decoder.read_next_frame()? {
        let mut palette = match (&frame.palette, &global_palette) {
            (Some(local), _) => rgb_palette(local),
            (None, Some(global)) => global.clone(),
            (None, None) => {
                return Err(LoopError::codec(format!(
                    "frame {} has no local or global palette",
                    frames.len()
                )));
            }
        };
        if let Some(entry) = frame
            .transparent
            .and_then(|t| palette.get_mut(usize::from(t)))
        {
            entry[3] = 0;
        }

        let indexed = IndexedFrame::new(
            u32::from(frame.width),
            u32::from(frame.height),
            frame.buffer.to_vec(),
            palette,
        )?
        .at(i64::from(frame.left), i64::from(frame.top));

        frames.push(indexed);
        delays.push(frame.delay);
        disposals.push(Disposal::from(frame.dispose));
    }

    if frames.is_empty() {
        return Err(LoopError::codec("animation contains no frames"));
    }

    let loop_count = match decoder.repeat() {
        ::gif::Repeat::Infinite => LoopCount::Infinite,
        ::gif::Repeat::Finite(0) => LoopCount::Once,
        ::gif::Repeat::Finite(n) => LoopCount::Finite(n),
    };

    tracing::debug!(frames = frames.len(), width, height, "decoded gif");

    Ok(Animation {
        width,
        height,
        sequence: Sequence::from_parts(frames, delays, disposals)?,
        loop_count,
        background_index,
    })
}

fn to_u16(value: i64, what: &str) -> LoopResult<u16> {
    u16::try_from(value)
        .map_err(|_| LoopError::codec(format!("{what} {value} does not fit a GIF frame")))
}

/// Encode an animation with one local palette per frame.
pub fn encode<W: Write>(writer: W, anim: &Animation) -> LoopResult<()> {
    let mut encoder = ::gif::Encoder::new(writer, anim.width, anim.height, &[])?;
    match anim.loop_count {
        LoopCount::Once => {}
        LoopCount::Infinite => encoder.set_repeat(::gif::Repeat::Infinite)?,
        LoopCount::Finite(n) => encoder.set_repeat(::gif::Repeat::Finite(n))?,
    }

    for cel in anim.sequence.cels() {
        let f = &cel.frame;
        if f.palette.is_empty() {
            return Err(LoopError::codec("cannot encode a frame without a palette"));
        }
        let palette: Vec<u8> = f.palette.iter().flat_map(|c| [c[0], c[1], c[2]]).collect();
        let mut frame = ::gif::Frame::default();
        frame.left = to_u16(f.left, "left offset")?;
        frame.top = to_u16(f.top, "top offset")?;
        frame.width = to_u16(i64::from(f.width), "width")?;
        frame.height = to_u16(i64::from(f.height), "height")?;
        frame.delay = cel.delay;
        frame.dispose = cel.disposal.into();
        frame.transparent = f.transparent_index();
        frame.palette = Some(palette);
        frame.buffer = Cow::Borrowed(&f.pixels);
        encoder.write_frame(&frame)?;
    }

    // the trailer is written when the encoder drops
    drop(encoder);
    tracing::debug!(frames = anim.frame_count(), "encoded gif");
    Ok(())
}

pub fn decode_file(path: &Path) -> LoopResult<Animation> {
    let file = File::open(path).with_context(|| format!("open gif '{}'", path.display()))?;
    decode(BufReader::new(file))
}

/// Encode into memory first so a failed edit never leaves a partial file.
pub fn encode_file(path: &Path, anim: &Animation) -> LoopResult<()> {
    let mut buf = Vec::new();
    encode(&mut buf, anim)?;

    let file = File::create(path).with_context(|| format!("create gif '{}'", path.display()))?;
    let mut out = BufWriter::new(file);
    out.write_all(&buf)
        .and_then(|()| out.flush())
        .with_context(|| format!("write gif '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/gif_codec.rs"]
mod tests;
