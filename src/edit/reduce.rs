use crate::foundation::error::{LoopError, LoopResult};
use crate::sequence::cel::Sequence;

/// Trim, window and cut settings applied by [`reduce`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reduction {
    pub trim_start: usize,
    pub trim_end: usize,
    /// Zero keeps everything left after trimming.
    pub window: usize,
    /// Zero disables cutting; 1 is invalid.
    pub cut_interval: usize,
}

impl Reduction {
    /// Check the length preconditions for an input of `len` positions.
    pub fn check_budget(&self, len: usize) -> LoopResult<()> {
        let trimmed = self.trim_start.saturating_add(self.trim_end);
        if trimmed >= len {
            return Err(LoopError::insufficient_frames(format!(
                "trimming {} + {} frames leaves nothing of {len}; minimum 1 output frame",
                self.trim_start, self.trim_end
            )));
        }
        let remaining = len - trimmed;
        if self.window > remaining {
            return Err(LoopError::insufficient_frames(format!(
                "window of {} frames is longer than the {remaining} frames left after trimming",
                self.window
            )));
        }
        if self.cut_interval == 1 {
            return Err(LoopError::configuration(
                "cut interval cannot be less than two",
            ));
        }
        Ok(())
    }

    /// Whether the 0-based `index` survives the cut.
    pub fn keeps(&self, index: usize) -> bool {
        self.cut_interval == 0 || (index + 1) % self.cut_interval != 0
    }
}

/// Drop trimmed, windowed-out and cut positions, keeping cels whole.
pub fn reduce<F>(seq: Sequence<F>, reduction: &Reduction) -> LoopResult<Sequence<F>> {
    let len = seq.len();
    reduction.check_budget(len)?;

    let kept = len - reduction.trim_start - reduction.trim_end;
    let kept = if reduction.window > 0 {
        reduction.window
    } else {
        kept
    };

    let cels = seq
        .into_cels()
        .into_iter()
        .skip(reduction.trim_start)
        .take(kept)
        .enumerate()
        .filter(|(i, _)| reduction.keeps(*i))
        .map(|(_, cel)| cel)
        .collect();

    let out = Sequence::new(cels)?;
    tracing::debug!(input = len, output = out.len(), "reduced sequence");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/edit/reduce.rs"]
mod tests;
