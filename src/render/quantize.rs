use std::collections::HashMap;

use image::RgbaImage;

use crate::foundation::core::{Rgba8, TRANSPARENT};
use crate::foundation::error::{LoopError, LoopResult};
use crate::render::composite::nearest_palette_index;
use crate::sequence::frame::{IndexedFrame, MAX_PALETTE_LEN};

/// Reduces a full-color raster to an indexed frame with a bounded palette.
///
/// The returned frame covers the whole raster and sits at the origin.
pub trait Quantizer {
    fn quantize(&self, raster: &RgbaImage, palette_size: usize) -> LoopResult<IndexedFrame>;
}

fn check_palette_size(palette_size: usize) -> LoopResult<()> {
    if palette_size == 0 || palette_size > MAX_PALETTE_LEN {
        return Err(LoopError::quantization(format!(
            "palette size must be within 1..={MAX_PALETTE_LEN}, got {palette_size}"
        )));
    }
    Ok(())
}

/// Fewest pixels NeuQuant learns from; smaller rasters are tiled up to this.
const MIN_TRAINING_PIXELS: usize = 1 << 14;

/// GIF palettes carry no partial alpha: keep a pixel opaque or make it the
/// canonical transparent color.
fn binarize_alpha(c: Rgba8) -> Rgba8 {
    if c[3] == 0 {
        TRANSPARENT
    } else {
        [c[0], c[1], c[2], 255]
    }
}

/// One palette entry per distinct color in first-appearance order, or `None`
/// when more than `palette_size` entries would be needed.
fn index_exact(colors: &[Rgba8], palette_size: usize) -> Option<(Vec<Rgba8>, Vec<u8>)> {
    let mut palette: Vec<Rgba8> = Vec::new();
    let mut lookup: HashMap<Rgba8, u8> = HashMap::new();
    let mut pixels = Vec::with_capacity(colors.len());

    for &c in colors {
        let idx = match lookup.get(&c) {
            Some(&idx) => idx,
            None => {
                if palette.len() == palette_size {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push(c);
                lookup.insert(c, idx);
                idx
            }
        };
        pixels.push(idx);
    }
    Some((palette, pixels))
}

fn raster_colors(raster: &RgbaImage) -> Vec<Rgba8> {
    raster.pixels().map(|px| px.0).collect()
}

/// NeuQuant network quantizer backed by `color_quant`.
///
/// Rasters that already fit the palette are indexed exactly. Otherwise the
/// network learns the opaque colors and transparent pixels get one extra
/// dedicated entry.
#[derive(Clone, Copy, Debug)]
pub struct NeuQuantizer {
    /// 1 is the slowest and most accurate, 30 the fastest.
    pub sample_factor: i32,
}

impl Default for NeuQuantizer {
    fn default() -> Self {
        Self { sample_factor: 10 }
    }
}

impl NeuQuantizer {
    fn learn(&self, colors: &[Rgba8], palette_size: usize) -> LoopResult<(Vec<Rgba8>, Vec<u8>)> {
        let has_clear = colors.iter().any(|c| c[3] == 0);
        let budget = if has_clear {
            palette_size.saturating_sub(1).max(1)
        } else {
            palette_size
        };

        let opaque: Vec<u8> = colors
            .iter()
            .filter(|c| c[3] != 0)
            .flat_map(|c| *c)
            .collect();
        let opaque_pixels = opaque.len() / 4;
        if opaque_pixels == 0 {
            return Err(LoopError::quantization("no opaque pixels to learn from"));
        }
        let sample = if opaque_pixels < MIN_TRAINING_PIXELS {
            opaque.repeat(MIN_TRAINING_PIXELS.div_ceil(opaque_pixels))
        } else {
            opaque
        };

        let nq = color_quant::NeuQuant::new(self.sample_factor, budget, &sample);
        let mut palette: Vec<Rgba8> = nq
            .color_map_rgba()
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], 255])
            .collect();
        let opaque_len = palette.len();
        if has_clear {
            palette.push(TRANSPARENT);
        }

        let mut lookup: HashMap<Rgba8, u8> = HashMap::new();
        let mut pixels = Vec::with_capacity(colors.len());
        for &c in colors {
            let idx = match lookup.get(&c) {
                Some(&idx) => idx,
                None => {
                    let idx = if c[3] == 0 {
                        opaque_len
                    } else {
                        nearest_palette_index(&palette[..opaque_len], c).ok_or_else(|| {
                            LoopError::quantization("NeuQuant produced an empty palette")
                        })?
                    };
                    let idx = idx as u8;
                    lookup.insert(c, idx);
                    idx
                }
            };
            pixels.push(idx);
        }
        Ok((palette, pixels))
    }
}

impl Quantizer for NeuQuantizer {
    fn quantize(&self, raster: &RgbaImage, palette_size: usize) -> LoopResult<IndexedFrame> {
        check_palette_size(palette_size)?;
        if !(1..=30).contains(&self.sample_factor) {
            return Err(LoopError::quantization(format!(
                "sample factor must be within 1..=30, got {}",
                self.sample_factor
            )));
        }
        if raster.width() == 0 || raster.height() == 0 {
            return Err(LoopError::quantization("cannot quantize an empty raster"));
        }

        let colors: Vec<Rgba8> = raster.pixels().map(|px| binarize_alpha(px.0)).collect();
        let (palette, pixels) = match index_exact(&colors, palette_size) {
            Some(exact) => exact,
            None => {
                tracing::debug!(palette_size, "raster exceeds the palette; training NeuQuant");
                self.learn(&colors, palette_size)?
            }
        };

        IndexedFrame::new(raster.width(), raster.height(), pixels, palette)
    }
}

/// Lossless quantizer: one palette entry per distinct color, in order of
/// first appearance. Fails when the raster needs more entries than allowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactQuantizer;

impl Quantizer for ExactQuantizer {
    fn quantize(&self, raster: &RgbaImage, palette_size: usize) -> LoopResult<IndexedFrame> {
        check_palette_size(palette_size)?;

        let (palette, pixels) =
            index_exact(&raster_colors(raster), palette_size).ok_or_else(|| {
                LoopError::quantization(format!(
                    "raster holds more than {palette_size} distinct colors"
                ))
            })?;

        IndexedFrame::new(raster.width(), raster.height(), pixels, palette)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/quantize.rs"]
mod tests;
