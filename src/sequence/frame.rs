use image::RgbaImage;

use crate::foundation::core::{Bounds, Rgba8, TRANSPARENT};
use crate::foundation::error::{LoopError, LoopResult};
use crate::foundation::math::{wrap, wrap_index};

/// Largest palette an indexed frame may carry.
pub const MAX_PALETTE_LEN: usize = 256;

/// A palette-indexed raster positioned on the logical screen.
///
/// Pixels are row-major palette indices. A palette entry with alpha 0 is the
/// transparent color; an index past the end of the palette also reads as
/// transparent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedFrame {
    pub left: i64,
    pub top: i64,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub palette: Vec<Rgba8>,
}

impl IndexedFrame {
    /// Build a frame at the origin, checking the pixel buffer and palette sizes.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>, palette: Vec<Rgba8>) -> LoopResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| LoopError::codec("frame size overflow"))?;
        if pixels.len() != expected {
            return Err(LoopError::codec(format!(
                "frame expects {expected} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        if palette.len() > MAX_PALETTE_LEN {
            return Err(LoopError::codec(format!(
                "palette holds {} entries, at most {MAX_PALETTE_LEN} allowed",
                palette.len()
            )));
        }
        Ok(Self {
            left: 0,
            top: 0,
            width,
            height,
            pixels,
            palette,
        })
    }

    /// Place the frame at an offset on the logical screen.
    pub fn at(mut self, left: i64, top: i64) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.left, self.top, self.width, self.height)
    }

    pub fn color_at(&self, x: u32, y: u32) -> Rgba8 {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels
            .get(idx)
            .and_then(|&i| self.palette.get(usize::from(i)))
            .copied()
            .unwrap_or(TRANSPARENT)
    }

    /// Expand to a straight-alpha RGBA raster of the frame's own size.
    pub fn to_rgba(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(self.color_at(x, y))
        })
    }

    /// First palette entry with zero alpha, used as the GIF transparent index.
    pub fn transparent_index(&self) -> Option<u8> {
        self.palette
            .iter()
            .position(|c| c[3] == 0)
            .and_then(|i| u8::try_from(i).ok())
    }

    /// Roll the pixels by `(dx, dy)`, wrapping around the frame edges.
    pub fn panned(&self, dx: i64, dy: i64) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        if w == 0 || h == 0 {
            return self.clone();
        }
        let dx = wrap(dx, w as i64);
        let dy = wrap(dy, h as i64);
        let mut pixels = vec![0u8; self.pixels.len()];
        for y in 0..h {
            let dst_y = wrap_index(y as i64 + dy, h);
            for x in 0..w {
                let dst_x = wrap_index(x as i64 + dx, w);
                pixels[dst_y * w + dst_x] = self.pixels[y * w + x];
            }
        }
        Self {
            pixels,
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/frame.rs"]
mod tests;
