use rand::Rng;

use crate::edit::config::EditConfig;
use crate::edit::reduce::reduce;
use crate::edit::stitch::{Stitch, StitchOpts, expand};
use crate::edit::{fade, shift, timing};
use crate::foundation::error::{LoopError, LoopResult};
use crate::render::composite::{Compositor, max_palette_len};
use crate::render::quantize::{NeuQuantizer, Quantizer};
use crate::sequence::animation::Animation;
use crate::sequence::cel::Sequence;
use crate::sequence::frame::IndexedFrame;

/// Runs the whole edit for one immutable [`EditConfig`].
pub struct Editor {
    config: EditConfig,
    quantizer: Box<dyn Quantizer>,
}

impl Editor {
    /// Editor using the NeuQuant quantizer.
    pub fn new(config: EditConfig) -> Self {
        Self {
            config,
            quantizer: Box::new(NeuQuantizer::default()),
        }
    }

    pub fn with_quantizer(mut self, quantizer: Box<dyn Quantizer>) -> Self {
        self.quantizer = quantizer;
        self
    }

    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    pub fn edit(&self, source: &Animation) -> LoopResult<Animation> {
        self.edit_with_rng(source, &mut rand::thread_rng())
    }

    /// Same as [`Editor::edit`] with an explicit random source for Shuffle.
    #[tracing::instrument(
        skip_all,
        fields(frames = source.frame_count(), stitch = %self.config.stitch)
    )]
    pub fn edit_with_rng<R: Rng + ?Sized>(
        &self,
        source: &Animation,
        rng: &mut R,
    ) -> LoopResult<Animation> {
        let cfg = &self.config;
        cfg.reduction.check_budget(source.frame_count())?;

        let (frames, delays, _) = source.sequence.clone().into_parts();
        let palette_size = max_palette_len(&frames);
        let mut seq = self.flatten(&frames, delays, palette_size)?;
        tracing::debug!(frames = seq.len(), palette_size, "flattened source frames");

        if cfg.reverse && cfg.stitch != Stitch::Shuffle {
            seq.reverse();
        }

        let seq = reduce(seq, &cfg.reduction)?;
        let opts = StitchOpts {
            pan_velocity: cfg.pan_velocity,
            palette_size,
        };
        let mut seq = expand(&seq, cfg.stitch, opts, self.quantizer.as_ref())?;
        timing::scale(&mut seq, cfg.delay_factor);

        let seq = if cfg.stitch == Stitch::Shuffle {
            seq.shuffle(rng);
            seq
        } else {
            let mut rotated = shift::rotate(&seq, cfg.shift);
            if let Some(f) = &cfg.fade {
                fade::apply(&mut rotated, f);
            }
            rotated
        };

        let (width, height) = canvas_size(&seq)?;
        tracing::debug!(output = seq.len(), width, height, "edit complete");

        Ok(Animation {
            width,
            height,
            sequence: seq,
            loop_count: cfg.loop_count,
            background_index: source.background_index,
        })
    }

    /// Composite and requantize every source frame onto the shared canvas.
    fn flatten(
        &self,
        frames: &[IndexedFrame],
        delays: Vec<u16>,
        palette_size: usize,
    ) -> LoopResult<Sequence<IndexedFrame>> {
        let compositor = Compositor::new(self.config.transparent);
        let quantized = compositor
            .composite(frames)
            .iter()
            .map(|raster| self.quantizer.quantize(raster, palette_size))
            .collect::<LoopResult<Vec<_>>>()?;
        let disposals = vec![compositor.disposal(); quantized.len()];
        Sequence::from_parts(quantized, delays, disposals)
    }
}

fn canvas_size(seq: &Sequence<IndexedFrame>) -> LoopResult<(u16, u16)> {
    let first = &seq.cels()[0].frame;
    let width = u16::try_from(first.width)
        .map_err(|_| LoopError::codec(format!("canvas width {} exceeds GIF limits", first.width)))?;
    let height = u16::try_from(first.height).map_err(|_| {
        LoopError::codec(format!("canvas height {} exceeds GIF limits", first.height))
    })?;
    Ok((width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/edit/pipeline.rs"]
mod tests;
