use crate::sequence::cel::Sequence;

/// Shortest delay common players render faithfully, in centiseconds.
pub const MIN_DELAY: u16 = 2;

/// `max(2, round(delay * factor))`, saturating at `u16::MAX`.
pub fn scale_delay(delay: u16, factor: f64) -> u16 {
    let scaled = (f64::from(delay) * factor).round();
    scaled.clamp(f64::from(MIN_DELAY), f64::from(u16::MAX)) as u16
}

pub fn scale<F>(seq: &mut Sequence<F>, factor: f64) {
    for cel in seq.cels_mut() {
        cel.delay = scale_delay(cel.delay, factor);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/timing.rs"]
mod tests;
