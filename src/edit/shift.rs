use crate::foundation::math::wrap_index;
use crate::sequence::cel::Sequence;

/// Circular shift: output position `i` holds input position
/// `wrap(i + offset, len)`, so a positive offset moves the start leftward.
pub fn rotate<F: Clone>(seq: &Sequence<F>, offset: i64) -> Sequence<F> {
    let mut out = seq.clone();
    let start = wrap_index(offset, out.len());
    out.cels_mut().rotate_left(start);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/edit/shift.rs"]
mod tests;
