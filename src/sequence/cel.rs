use rand::Rng;
use rand::seq::SliceRandom;

use crate::foundation::core::Disposal;
use crate::foundation::error::{LoopError, LoopResult};

/// One position of an animation: a frame with its delay and disposal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cel<F> {
    pub frame: F,
    /// Hundredths of a second.
    pub delay: u16,
    pub disposal: Disposal,
}

/// An ordered, non-empty run of cels.
///
/// Frames, delays and disposals travel together, so every stage that
/// filters or reorders positions keeps the three aligned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence<F> {
    cels: Vec<Cel<F>>,
}

impl<F> Sequence<F> {
    pub fn new(cels: Vec<Cel<F>>) -> LoopResult<Self> {
        if cels.is_empty() {
            return Err(LoopError::insufficient_frames(
                "a sequence needs at least one frame",
            ));
        }
        Ok(Self { cels })
    }

    /// Zip three parallel lists into a sequence.
    pub fn from_parts(
        frames: Vec<F>,
        delays: Vec<u16>,
        disposals: Vec<Disposal>,
    ) -> LoopResult<Self> {
        if frames.len() != delays.len() || frames.len() != disposals.len() {
            return Err(LoopError::codec(format!(
                "misaligned sequence: {} frames, {} delays, {} disposals",
                frames.len(),
                delays.len(),
                disposals.len()
            )));
        }
        let cels = frames
            .into_iter()
            .zip(delays)
            .zip(disposals)
            .map(|((frame, delay), disposal)| Cel {
                frame,
                delay,
                disposal,
            })
            .collect();
        Self::new(cels)
    }

    pub fn into_parts(self) -> (Vec<F>, Vec<u16>, Vec<Disposal>) {
        let mut frames = Vec::with_capacity(self.cels.len());
        let mut delays = Vec::with_capacity(self.cels.len());
        let mut disposals = Vec::with_capacity(self.cels.len());
        for cel in self.cels {
            frames.push(cel.frame);
            delays.push(cel.delay);
            disposals.push(cel.disposal);
        }
        (frames, delays, disposals)
    }

    pub fn len(&self) -> usize {
        self.cels.len()
    }

    /// Always false for a constructed sequence; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.cels.is_empty()
    }

    pub fn cels(&self) -> &[Cel<F>] {
        &self.cels
    }

    pub fn cels_mut(&mut self) -> &mut [Cel<F>] {
        &mut self.cels
    }

    pub fn into_cels(self) -> Vec<Cel<F>> {
        self.cels
    }

    pub fn frames(&self) -> impl Iterator<Item = &F> {
        self.cels.iter().map(|c| &c.frame)
    }

    pub fn delays(&self) -> impl Iterator<Item = u16> + '_ {
        self.cels.iter().map(|c| c.delay)
    }

    pub fn disposals(&self) -> impl Iterator<Item = Disposal> + '_ {
        self.cels.iter().map(|c| c.disposal)
    }

    pub fn reverse(&mut self) {
        self.cels.reverse();
    }

    /// Apply a uniformly random permutation to whole cels.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cels.shuffle(rng);
    }
}

impl<F: Clone> Sequence<F> {
    /// Build a new sequence by picking source positions, cloning shared cels.
    pub fn select(&self, indices: &[usize]) -> LoopResult<Self> {
        let cels = indices
            .iter()
            .map(|&i| {
                self.cels.get(i).cloned().ok_or_else(|| {
                    LoopError::Other(anyhow::anyhow!(
                        "source index {i} out of range for {} cels",
                        self.cels.len()
                    ))
                })
            })
            .collect::<LoopResult<Vec<_>>>()?;
        Self::new(cels)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/cel.rs"]
mod tests;
