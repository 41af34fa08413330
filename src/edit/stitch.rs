use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{LoopError, LoopResult};
use crate::render::quantize::Quantizer;
use crate::sequence::cel::Sequence;
use crate::sequence::frame::IndexedFrame;

/// Loop continuity strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Stitch {
    /// Leave the sequence as-is.
    None,
    /// Play forward, then backward without repeating the turning frame.
    #[default]
    Mirror,
    /// Play forward, then again mirrored left-to-right.
    FlipH,
    /// Play forward, then again mirrored top-to-bottom.
    FlipV,
    /// Randomize the order of the sequence.
    Shuffle,
    /// Roll the canvas horizontally a little more on every frame.
    PanH,
    /// Roll the canvas vertically a little more on every frame.
    PanV,
}

/// Ordinal order matches the table order.
const STITCH_TABLE: [(Stitch, &str); 7] = [
    (Stitch::None, "None"),
    (Stitch::Mirror, "Mirror"),
    (Stitch::FlipH, "FlipH"),
    (Stitch::FlipV, "FlipV"),
    (Stitch::Shuffle, "Shuffle"),
    (Stitch::PanH, "PanH"),
    (Stitch::PanV, "PanV"),
];

impl Stitch {
    /// Every stitch, in table order.
    pub const ALL: [Stitch; STITCH_TABLE.len()] = {
        let mut all = [Stitch::None; STITCH_TABLE.len()];
        let mut i = 0;
        while i < STITCH_TABLE.len() {
            all[i] = STITCH_TABLE[i].0;
            i += 1;
        }
        all
    };

    pub fn name(self) -> &'static str {
        STITCH_TABLE
            .iter()
            .find(|(s, _)| *s == self)
            .map(|(_, name)| *name)
            .unwrap_or("Unknown")
    }

    pub fn ordinal(self) -> u8 {
        STITCH_TABLE
            .iter()
            .position(|(s, _)| *s == self)
            .unwrap_or(0) as u8
    }

    /// Look up a stitch by ordinal, rejecting anything outside the table.
    pub fn from_ordinal(ordinal: u8) -> LoopResult<Self> {
        STITCH_TABLE
            .get(usize::from(ordinal))
            .map(|(s, _)| *s)
            .ok_or_else(|| LoopError::configuration(format!("invalid stitch value: {ordinal}")))
    }

    /// Number of output positions for `n` input positions.
    pub fn output_len(self, n: usize) -> usize {
        match self {
            Stitch::Mirror => (2 * n).saturating_sub(1),
            Stitch::FlipH | Stitch::FlipV => 2 * n,
            Stitch::None | Stitch::Shuffle | Stitch::PanH | Stitch::PanV => n,
        }
    }

    /// Source position for output position `i` of an `n`-long input.
    pub fn source_index(self, i: usize, n: usize) -> usize {
        match self {
            Stitch::Mirror if i >= n => 2 * (n - 1) - i,
            Stitch::FlipH | Stitch::FlipV => i % n,
            _ => i,
        }
    }

    /// Whether output position `i` replays a mirrored copy.
    pub fn is_flipped(self, i: usize, n: usize) -> bool {
        matches!(self, Stitch::FlipH | Stitch::FlipV) && i >= n
    }

    pub fn source_indices(self, n: usize) -> Vec<usize> {
        (0..self.output_len(n))
            .map(|i| self.source_index(i, n))
            .collect()
    }
}

impl fmt::Display for Stitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stitch {
    type Err = LoopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STITCH_TABLE
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(stitch, _)| *stitch)
            .ok_or_else(|| {
                let known = STITCH_TABLE
                    .iter()
                    .map(|(_, n)| *n)
                    .collect::<Vec<_>>()
                    .join("/");
                LoopError::configuration(format!("unknown stitch '{s}' (expected {known})"))
            })
    }
}

impl TryFrom<String> for Stitch {
    type Error = LoopError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Stitch> for String {
    fn from(value: Stitch) -> Self {
        value.name().to_string()
    }
}

/// Parameters for [`expand`] beyond the stitch itself.
#[derive(Clone, Copy, Debug)]
pub struct StitchOpts {
    /// Pixels to roll per output position for the pan stitches.
    pub pan_velocity: f64,
    /// Palette size used when mirrored frames are requantized.
    pub palette_size: usize,
}

/// Expand or reorder a reduced sequence according to `stitch`.
///
/// Shuffle only carries the positions over here; the permutation itself is
/// drawn once delays are final.
pub fn expand(
    seq: &Sequence<IndexedFrame>,
    stitch: Stitch,
    opts: StitchOpts,
    quantizer: &dyn Quantizer,
) -> LoopResult<Sequence<IndexedFrame>> {
    let n = seq.len();
    let mut out = seq.select(&stitch.source_indices(n))?;

    for (i, cel) in out.cels_mut().iter_mut().enumerate() {
        if stitch.is_flipped(i, n) {
            let raster = cel.frame.to_rgba();
            let flipped = match stitch {
                Stitch::FlipH => image::imageops::flip_horizontal(&raster),
                _ => image::imageops::flip_vertical(&raster),
            };
            cel.frame = quantizer.quantize(&flipped, opts.palette_size)?;
        }

        let offset = pan_offset(i, opts.pan_velocity);
        match stitch {
            Stitch::PanH => cel.frame = cel.frame.panned(offset, 0),
            Stitch::PanV => cel.frame = cel.frame.panned(0, offset),
            _ => {}
        }
    }

    tracing::debug!(%stitch, input = n, output = out.len(), "stitched sequence");
    Ok(out)
}

pub fn pan_offset(i: usize, velocity: f64) -> i64 {
    (i as f64 * velocity).round() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/edit/stitch.rs"]
mod tests;
