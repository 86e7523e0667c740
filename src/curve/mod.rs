//! Hilbert curve conversions between 1D distances and 2D grid cells.
//!
//! The curve covers an `n x n` grid, `n` a power of two, visiting every cell
//! exactly once. Consecutive distances always land on edge-adjacent cells,
//! which is what makes the ordering useful for locality-preserving indexing.
//!
//! Cell `(0, 0)` is the lower left-hand corner and the curve starts there;
//! distance `n^2 - 1` is the lower right-hand corner `(n - 1, 0)`.
//!
//! # Module Organization
//!
//! - [`int`]: the [`CurveInt`] trait abstracting over unsigned widths
//! - `transform`: quadrant rotation/reflection shared by both directions
//! - `encode`: coordinate to distance
//! - `decode`: distance to coordinate
//!
//! # Preconditions
//!
//! [`xy_to_d`] and [`d_to_xy`] do not validate their input. `n` must be a
//! power of two, coordinates must lie in `[0, n - 1]` and distances in
//! `[0, n^2 - 1]`. Violations produce an unspecified value but never panic.
//! Use [`GridOrder`](crate::GridOrder) for range-checked conversions.

mod decode;
mod encode;
pub mod int;
mod transform;

pub use decode::d_to_xy;
pub use encode::xy_to_d;
pub use int::CurveInt;
pub use transform::rotate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let n = 256u64;
        for d in 0..100 {
            let (x, y) = d_to_xy(n, d);
            let d2 = xy_to_d(n, x, y);
            assert_eq!(d, d2, "Roundtrip failed for d={d}");
        }
    }

    #[test]
    fn test_order_two_shape() {
        // Even orders leave the origin along x, odd orders along y.
        let expected = [(0, 0), (1, 0), (1, 1), (0, 1), (0, 2)];
        for (d, &xy) in expected.iter().enumerate() {
            assert_eq!(d_to_xy(4u32, d as u32), xy, "Wrong cell for d={d}");
        }
    }

    #[test]
    fn test_order_one_shape() {
        let expected = [(0, 0), (0, 1), (1, 1), (1, 0)];
        for (d, &xy) in expected.iter().enumerate() {
            assert_eq!(d_to_xy(2u32, d as u32), xy, "Wrong cell for d={d}");
        }
    }

    #[test]
    fn test_single_cell_grid() {
        assert_eq!(xy_to_d(1u8, 0, 0), 0);
        assert_eq!(d_to_xy(1u8, 0), (0, 0));
    }

    #[test]
    fn test_upper_corner_roundtrip() {
        // (3, 0) reflects through 2 - 1 - 3 at the top scale
        let n = 4u64;
        let d = xy_to_d(n, 3, 0);
        assert_eq!(d, 15);
        assert_eq!(d_to_xy(n, d), (3, 0));
    }

    #[test]
    fn test_full_roundtrip_larger() {
        let n = 64usize;
        for d in 0..(n * n) {
            let (x, y) = d_to_xy(n, d);
            assert_eq!(xy_to_d(n, x, y), d, "Roundtrip d->xy->d failed for d={d}");
        }
    }

    #[test]
    fn test_widths_agree() {
        for d in 0..256u32 {
            let (x, y) = d_to_xy(16u32, d);
            let (x8, y8) = d_to_xy(16u8, d as u8);
            let (x128, y128) = d_to_xy(16u128, u128::from(d));
            assert_eq!((u32::from(x8), u32::from(y8)), (x, y));
            assert_eq!((x128, y128), (u128::from(x), u128::from(y)));
        }
    }

    #[test]
    fn test_largest_u8_grid() {
        // 16 * 16 = 256 overflows u8, but the largest distance 255 does not
        // and the kernel never forms n * n.
        for d in 0..=u8::MAX {
            let (x, y) = d_to_xy(16u8, d);
            assert_eq!(xy_to_d(16u8, x, y), d);
        }
    }

    #[test]
    fn test_out_of_range_does_not_panic() {
        let _ = xy_to_d(4u16, 9, 200);
        let _ = d_to_xy(4u16, 1000);
        let _ = xy_to_d(6u32, 5, 5);
        let _ = d_to_xy(0u32, 3);
    }
}
