use image::RgbaImage;

use crate::foundation::core::{Bounds, Disposal, Rgba8, TRANSPARENT};
use crate::foundation::math::mul_div255_u8;
use crate::sequence::frame::IndexedFrame;

pub type PremulRgba8 = [u8; 4];

/// Source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(src[3], mul_div255(u16::from(dst[3]), inv));
    for i in 0..3 {
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(src[i], dc);
    }
    out
}

pub fn premultiply(c: Rgba8) -> PremulRgba8 {
    let a = u16::from(c[3]);
    [
        mul_div255(u16::from(c[0]), a),
        mul_div255(u16::from(c[1]), a),
        mul_div255(u16::from(c[2]), a),
        c[3],
    ]
}

/// Paint `src` over `dst`, with the frame placed relative to `origin`.
pub fn draw_over(dst: &mut RgbaImage, src: &IndexedFrame, origin: (i64, i64)) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let ox = src.left - origin.0;
    let oy = src.top - origin.1;

    for y in 0..src.height {
        let cy = oy + i64::from(y);
        if cy < 0 || cy >= dh {
            continue;
        }
        for x in 0..src.width {
            let cx = ox + i64::from(x);
            if cx < 0 || cx >= dw {
                continue;
            }
            let px = dst.get_pixel_mut(cx as u32, cy as u32);
            px.0 = over(px.0, premultiply(src.color_at(x, y)));
        }
    }
}

/// Replace every pixel of `dst` with one uniform color.
pub fn draw_source(dst: &mut RgbaImage, color: Rgba8) {
    let c = premultiply(color);
    for px in dst.pixels_mut() {
        px.0 = c;
    }
}

/// Index of the palette entry closest to `target` (squared RGBA distance).
pub fn nearest_palette_index(palette: &[Rgba8], target: Rgba8) -> Option<usize> {
    palette
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| {
            c.iter()
                .zip(target.iter())
                .map(|(&a, &b)| {
                    let d = i32::from(a) - i32::from(b);
                    (d * d) as u32
                })
                .sum::<u32>()
        })
        .map(|(i, _)| i)
}

/// Union bounding box of all frame rectangles.
///
/// The running minimum starts at the logical-screen origin and only shrinks,
/// so offsets stay relative to the screen while negative origins widen the
/// canvas instead of being clipped.
pub fn canvas_bounds(frames: &[IndexedFrame]) -> Bounds {
    frames
        .iter()
        .map(IndexedFrame::bounds)
        .fold(Bounds::default(), Bounds::union)
}

/// Largest palette across the frames, at least 1.
pub fn max_palette_len(frames: &[IndexedFrame]) -> usize {
    frames
        .iter()
        .map(|f| f.palette.len())
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Flattens source frames onto a canvas, one raster per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compositor {
    /// Draw every frame on a fresh transparent canvas instead of
    /// accumulating onto a persistent opaque one.
    pub transparent: bool,
}

impl Compositor {
    pub fn new(transparent: bool) -> Self {
        Self { transparent }
    }

    /// Disposal the editor writes for every output frame.
    pub fn disposal(&self) -> Disposal {
        if self.transparent {
            Disposal::Background
        } else {
            Disposal::Keep
        }
    }

    pub fn composite(&self, frames: &[IndexedFrame]) -> Vec<RgbaImage> {
        let bounds = canvas_bounds(frames);
        let origin = (bounds.min_x, bounds.min_y);
        let (width, height) = (bounds.width(), bounds.height());

        let mut canvas = RgbaImage::new(width, height);
        if let Some(first) = frames.first() {
            let seed = nearest_palette_index(&first.palette, TRANSPARENT)
                .map(|i| first.palette[i])
                .unwrap_or(TRANSPARENT);
            draw_source(&mut canvas, seed);
        }

        let mut out = Vec::with_capacity(frames.len());
        for frame in frames {
            if self.transparent {
                let mut fresh = RgbaImage::new(width, height);
                draw_over(&mut fresh, frame, origin);
                out.push(fresh);
            } else {
                draw_over(&mut canvas, frame, origin);
                out.push(canvas.clone());
            }
        }

        tracing::debug!(
            frames = frames.len(),
            width,
            height,
            transparent = self.transparent,
            "composited source frames"
        );
        out
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    mul_div255_u8(x, y)
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
