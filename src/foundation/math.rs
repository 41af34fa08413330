/// Signed modulo: `a - m * floor(a / m)`.
///
/// The result takes the sign of `m`, so for a positive length every offset,
/// negative ones included, lands in `0..m`.
pub fn wrap(a: i64, m: i64) -> i64 {
    debug_assert!(m != 0, "wrap divisor must be non-zero");
    let r = a.wrapping_rem(m);
    // r and m have opposite signs here, so the sum cannot overflow
    if r != 0 && ((r < 0) != (m < 0)) {
        r + m
    } else {
        r
    }
}

/// Wrap a signed index into `0..len`.
pub fn wrap_index(index: i64, len: usize) -> usize {
    wrap(index, len as i64) as usize
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
