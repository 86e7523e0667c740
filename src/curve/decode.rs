use super::{CurveInt, rotate};

/// Convert distance along the Hilbert curve to (x, y) coordinates.
///
/// # Arguments
/// * `n` - The side of the grid (must be a power of 2)
/// * `d` - Distance along the Hilbert curve, in `[0, n^2 - 1]`
///
/// # Returns
/// A tuple of (x, y) coordinates, each in `[0, n - 1]`.
///
/// This is the inverse of [`xy_to_d`](super::xy_to_d) on valid input.
///
/// # Example
///
/// ```
/// use hilbert_grid::{d_to_xy, xy_to_d};
///
/// let (x, y) = d_to_xy(16u64, 100);
/// assert_eq!(xy_to_d(16u64, x, y), 100);
/// ```
#[inline]
pub fn d_to_xy<T: CurveInt>(n: T, d: T) -> (T, T) {
    let mut point = (T::ZERO, T::ZERO);
    let mut s = T::ONE;
    let mut t = d;

    while s < n {
        let rx = T::ONE & (t / T::TWO);
        let ry = T::ONE & (t ^ rx);

        // Undo the parent rotation before placing this quadrant's offset.
        point = rotate(s, rx, ry, point);

        point.0 = point.0.wrapping_add(s * rx);
        point.1 = point.1.wrapping_add(s * ry);
        t = t / T::FOUR;

        s = match s.checked_mul(T::TWO) {
            Some(next) => next,
            None => break,
        };
    }

    point
}
