use super::CurveInt;

/// Rotate/flip a quadrant appropriately for the Hilbert curve transformation.
///
/// `s` is the side of the sub-square the point currently lives in and
/// `rx`/`ry` are its quadrant bits (`0` or `1`). When `ry == 0` the point is
/// reflected through the sub-square's centre if `rx == 1`, then its axes are
/// swapped. When `ry == 1` the point is returned unchanged.
///
/// The reflection order matters: swapping before reflecting produces a curve
/// that no longer inverts.
///
/// The subtraction wraps. While encoding, `x` or `y` may still carry the bit
/// of the quadrant just consumed, so `s - 1 - x` goes "negative"; only the
/// low bits are read afterwards, and those match two's complement.
#[inline(always)]
pub fn rotate<T: CurveInt>(s: T, rx: T, ry: T, (x, y): (T, T)) -> (T, T) {
    if ry != T::ZERO {
        return (x, y);
    }

    if rx == T::ONE {
        let edge = s.wrapping_sub(T::ONE);
        (edge.wrapping_sub(y), edge.wrapping_sub(x))
    } else {
        (y, x)
    }
}
