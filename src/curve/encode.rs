use super::{CurveInt, rotate};

/// Convert (x, y) coordinates to distance along the Hilbert curve.
///
/// # Arguments
/// * `n` - The side of the grid (must be a power of 2)
/// * `x` - X coordinate, in `[0, n - 1]`
/// * `y` - Y coordinate, in `[0, n - 1]`
///
/// # Returns
/// The distance `d` along the Hilbert curve, in `[0, n^2 - 1]`.
///
/// Input is not validated; see the [module docs](super) for what happens
/// when the preconditions do not hold.
///
/// # Example
///
/// ```
/// use hilbert_grid::xy_to_d;
///
/// assert_eq!(xy_to_d(4u32, 0, 0), 0);
/// assert_eq!(xy_to_d(4u32, 1, 0), 1);
/// assert_eq!(xy_to_d(4u32, 0, 2), 4);
/// assert_eq!(xy_to_d(4u32, 3, 0), 15);
/// ```
#[inline]
pub fn xy_to_d<T: CurveInt>(n: T, x: T, y: T) -> T {
    let mut d = T::ZERO;
    let mut point = (x, y);
    let mut s = n / T::TWO;

    while s > T::ZERO {
        let rx = T::from_bit((point.0 & s) > T::ZERO);
        let ry = T::from_bit((point.1 & s) > T::ZERO);
        // (rx, ry) -> quadrant ordinal: (0,0)=0 (0,1)=1 (1,1)=2 (1,0)=3
        let quadrant = (T::THREE * rx) ^ ry;
        d = d.wrapping_add(s.wrapping_mul(s).wrapping_mul(quadrant));
        point = rotate(s, rx, ry, point);
        s = s / T::TWO;
    }

    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_ordinals() {
        // At n = 2 the only scale is 1, so d is the quadrant ordinal.
        assert_eq!(xy_to_d(2u32, 0, 0), 0);
        assert_eq!(xy_to_d(2u32, 0, 1), 1);
        assert_eq!(xy_to_d(2u32, 1, 1), 2);
        assert_eq!(xy_to_d(2u32, 1, 0), 3);
    }

    #[test]
    fn test_order_three_corners() {
        let n = 8u64;
        assert_eq!(xy_to_d(n, 0, 0), 0);
        assert_eq!(xy_to_d(n, 0, 7), 21);
        assert_eq!(xy_to_d(n, 7, 7), 42);
        assert_eq!(xy_to_d(n, 7, 0), 63);
    }

    #[test]
    fn test_ignores_bits_above_grid() {
        // Only bits below n are tested, so out-of-range input aliases.
        assert_eq!(xy_to_d(4u32, 1 + 4, 2 + 8), xy_to_d(4u32, 1, 2));
    }

    #[test]
    fn test_non_power_of_two_side_stays_total() {
        let _ = xy_to_d(200u8, 150, 199);
        let _ = xy_to_d(u64::MAX, u64::MAX, u64::MAX);
    }
}
