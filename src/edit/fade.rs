use crate::foundation::core::Rgba8;
use crate::sequence::cel::Sequence;
use crate::sequence::frame::IndexedFrame;

/// Palette fade toward a solid color around the loop seam.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Fade {
    pub color: [u8; 3],
    /// Weight change per position, in positions.
    pub rate: f64,
}

/// Blend fraction per output position.
///
/// The weight starts at `len - 1`, falls by `rate` per step through the
/// first half, rises by `rate` per step through the second half, and is
/// clamped to `[0, len - 1]`. A single position never fades.
pub fn fade_fractions(len: usize, rate: f64) -> Vec<f64> {
    if len <= 1 {
        return vec![0.0; len];
    }

    let span = (len - 1) as f64;
    let half = len / 2;
    let mut weight = span;
    let mut out = Vec::with_capacity(len);

    for i in 0..len {
        out.push(weight / span);
        if i < half {
            weight -= rate;
        } else if i > half {
            weight += rate;
        }
        weight = weight.clamp(0.0, span);
    }
    out
}

pub fn blend_channel(channel: u8, target: u8, fraction: f64) -> u8 {
    let c = f64::from(channel);
    let v = c + (f64::from(target) - c) * fraction;
    v.clamp(0.0, 255.0) as u8
}

/// Blend one palette entry; alpha is left alone.
pub fn blend_color(color: Rgba8, target: [u8; 3], fraction: f64) -> Rgba8 {
    [
        blend_channel(color[0], target[0], fraction),
        blend_channel(color[1], target[1], fraction),
        blend_channel(color[2], target[2], fraction),
        color[3],
    ]
}

/// Fade every position's palette in place.
pub fn apply(seq: &mut Sequence<IndexedFrame>, fade: &Fade) {
    let fractions = fade_fractions(seq.len(), fade.rate);
    for (cel, fraction) in seq.cels_mut().iter_mut().zip(fractions) {
        for entry in &mut cel.frame.palette {
            *entry = blend_color(*entry, fade.color, fraction);
        }
    }
    tracing::debug!(
        positions = seq.len(),
        rate = fade.rate,
        "faded palettes toward {:02x}{:02x}{:02x}",
        fade.color[0],
        fade.color[1],
        fade.color[2]
    );
}

#[cfg(test)]
#[path = "../../tests/unit/edit/fade.rs"]
mod tests;
