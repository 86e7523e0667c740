//! Checked grid orders and curve traversal.
//!
//! [`GridOrder`] is the hardened entry point: the side is validated once at
//! construction, after which every conversion is range-checked and every
//! iteration is bounded by the grid.

use std::fmt;
use std::iter::FusedIterator;

use crate::curve::{CurveInt, d_to_xy, xy_to_d};
use crate::error::{Error, Result};
use crate::logging::{debug, trace};

/// A cell on the grid. `(0, 0)` is the lower left-hand corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: CurveInt> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`, or `None` if it does not fit `u128`
    /// (only possible for `u128` points near opposite corners).
    pub fn manhattan(&self, other: &Self) -> Option<u128> {
        let dx = self.x.to_u128().abs_diff(other.x.to_u128());
        let dy = self.y.to_u128().abs_diff(other.y.to_u128());
        dx.checked_add(dy)
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(point: Point<T>) -> Self {
        (point.x, point.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A validated Hilbert grid of `side x side` cells.
///
/// The side is a power of two and `side * side` fits in `T`, so every
/// distance on the curve is representable.
///
/// # Example
///
/// ```
/// use hilbert_grid::{GridOrder, Point};
///
/// let order = GridOrder::new(8u32)?;
/// let d = order.encode(5, 2)?;
/// assert_eq!(order.decode(d)?, Point::new(5, 2));
/// assert!(order.encode(8, 0).is_err());
/// # Ok::<(), hilbert_grid::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridOrder<T> {
    side: T,
    cells: T,
    level: u32,
}

impl<T: CurveInt> GridOrder<T> {
    /// Validate `side` as a grid side.
    pub fn new(side: T) -> Result<Self> {
        if !side.is_power_of_two() {
            debug!(side = %side, "rejected grid side");
            return Err(Error::NotPowerOfTwo {
                side: side.to_u128(),
            });
        }

        let cells = side.checked_mul(side).ok_or(Error::OrderTooLarge {
            side: side.to_u128(),
            bits: T::BITS,
        })?;
        let level = side.trailing_zeros();

        trace!(side = %side, level = level, "grid order created");
        Ok(Self { side, cells, level })
    }

    /// Grid of side `2^level`.
    pub fn from_level(level: u32) -> Result<Self> {
        let side = T::ONE.checked_shl(level).ok_or(Error::OrderTooLarge {
            side: 1u128.checked_shl(level).unwrap_or(u128::MAX),
            bits: T::BITS,
        })?;
        Self::new(side)
    }

    /// Smallest grid holding at least `count` cells (never smaller than 1x1).
    pub fn fitting(count: u128) -> Result<Self> {
        let mut level = 0u32;
        // side^2 = 4^level
        while level < 64 && (1u128 << (2 * level)) < count {
            level += 1;
        }
        if level == 64 {
            return Err(Error::OrderTooLarge {
                side: u128::MAX,
                bits: T::BITS,
            });
        }
        Self::from_level(level)
    }

    /// Side length of the grid.
    pub fn side(&self) -> T {
        self.side
    }

    /// Number of cells, `side^2`, which is also the curve length.
    pub fn cells(&self) -> T {
        self.cells
    }

    /// `log2(side)`; the curve's recursion depth.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Whether `point` lies inside the grid.
    pub fn contains(&self, point: Point<T>) -> bool {
        point.x < self.side && point.y < self.side
    }

    /// Distance of cell `(x, y)` along the curve.
    pub fn encode(&self, x: T, y: T) -> Result<T> {
        if x >= self.side || y >= self.side {
            return Err(Error::CoordinateOutOfRange {
                x: x.to_u128(),
                y: y.to_u128(),
                side: self.side.to_u128(),
            });
        }
        Ok(xy_to_d(self.side, x, y))
    }

    /// [`encode`](Self::encode) taking a [`Point`].
    pub fn encode_point(&self, point: Point<T>) -> Result<T> {
        self.encode(point.x, point.y)
    }

    /// Cell at distance `d` along the curve.
    pub fn decode(&self, d: T) -> Result<Point<T>> {
        if d >= self.cells {
            return Err(Error::DistanceOutOfRange {
                distance: d.to_u128(),
                cells: self.cells.to_u128(),
            });
        }
        Ok(d_to_xy(self.side, d).into())
    }

    /// Cells immediately before and after `d` on the curve.
    ///
    /// The first cell has no predecessor and the last has no successor.
    pub fn neighbors_on_curve(&self, d: T) -> Result<(Option<Point<T>>, Option<Point<T>>)> {
        // validates d
        self.decode(d)?;

        let prev = if d > T::ZERO {
            Some(d_to_xy(self.side, d.wrapping_sub(T::ONE)).into())
        } else {
            None
        };
        let next = match d.checked_add(T::ONE) {
            Some(n) if n < self.cells => Some(d_to_xy(self.side, n).into()),
            _ => None,
        };
        Ok((prev, next))
    }

    /// Iterate over every cell in curve order.
    pub fn iter(&self) -> CurveIter<T> {
        CurveIter {
            side: self.side,
            front: T::ZERO,
            back: self.cells,
        }
    }
}

impl<T: CurveInt> IntoIterator for GridOrder<T> {
    type Item = Point<T>;
    type IntoIter = CurveIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: CurveInt> IntoIterator for &GridOrder<T> {
    type Item = Point<T>;
    type IntoIter = CurveIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for GridOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.side, self.side)
    }
}

/// Iterator over the cells of a [`GridOrder`] in curve order.
///
/// `size_hint` is exact while the remaining cell count fits `usize`. Wider
/// `u128` grids can hold more cells than that, so the iterator does not
/// implement `ExactSizeIterator`.
#[derive(Debug, Clone)]
pub struct CurveIter<T> {
    side: T,
    front: T,
    /// One past the last distance still to yield.
    back: T,
}

impl<T: CurveInt> Iterator for CurveIter<T> {
    type Item = Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let point = d_to_xy(self.side, self.front).into();
        self.front = self.front + T::ONE;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.to_u128() - self.front.to_u128();
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: CurveInt> DoubleEndedIterator for CurveIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back = self.back.wrapping_sub(T::ONE);
        Some(d_to_xy(self.side, self.back).into())
    }
}

impl<T: CurveInt> FusedIterator for CurveIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_power_of_two() {
        for side in [0u32, 3, 6, 12, 100] {
            let err = GridOrder::new(side).unwrap_err();
            assert!(matches!(err, Error::NotPowerOfTwo { .. }), "side={side}");
        }
    }

    #[test]
    fn test_rejects_overflowing_cells() {
        let err = GridOrder::new(32u8).unwrap_err();
        assert!(matches!(err, Error::OrderTooLarge { side: 32, bits: 8 }));
        // 16 * 16 = 256 does not fit u8 even though the last distance does
        assert!(GridOrder::new(16u8).is_err());
        assert!(GridOrder::new(8u8).is_ok());
        assert!(GridOrder::new(1u64 << 32).is_err());
        assert!(GridOrder::new(1u64 << 31).is_ok());
    }

    #[test]
    fn test_from_level() {
        let order = GridOrder::<u32>::from_level(5).unwrap();
        assert_eq!(order.side(), 32);
        assert_eq!(order.cells(), 1024);
        assert_eq!(order.level(), 5);
        assert!(GridOrder::<u16>::from_level(7).is_ok());
        assert!(GridOrder::<u16>::from_level(8).is_err());
        assert!(GridOrder::<u16>::from_level(200).is_err());
    }

    #[test]
    fn test_fitting() {
        assert_eq!(GridOrder::<u64>::fitting(0).unwrap().side(), 1);
        assert_eq!(GridOrder::<u64>::fitting(1).unwrap().side(), 1);
        assert_eq!(GridOrder::<u64>::fitting(2).unwrap().side(), 2);
        assert_eq!(GridOrder::<u64>::fitting(16).unwrap().side(), 4);
        assert_eq!(GridOrder::<u64>::fitting(17).unwrap().side(), 8);
        assert_eq!(GridOrder::<u64>::fitting(10_000).unwrap().side(), 128);
        assert!(GridOrder::<u8>::fitting(257).is_err());
    }

    #[test]
    fn test_contains() {
        let order = GridOrder::new(4u16).unwrap();
        assert!(order.contains(Point::new(0, 0)));
        assert!(order.contains(Point::new(3, 3)));
        assert!(!order.contains(Point::new(4, 0)));
        assert!(!order.contains(Point::new(0, 4)));
        assert!(order.iter().all(|p| order.contains(p)));
    }

    #[test]
    fn test_encode_decode_checked() {
        let order = GridOrder::new(4u16).unwrap();
        assert_eq!(order.encode(3, 0).unwrap(), 15);
        assert_eq!(order.decode(15).unwrap(), Point::new(3, 0));

        let err = order.encode(4, 0).unwrap_err();
        assert!(matches!(err, Error::CoordinateOutOfRange { x: 4, y: 0, side: 4 }));
        let err = order.decode(16).unwrap_err();
        assert!(matches!(err, Error::DistanceOutOfRange { distance: 16, cells: 16 }));
    }

    #[test]
    fn test_neighbors_on_curve() {
        let order = GridOrder::new(4u32).unwrap();
        let (prev, next) = order.neighbors_on_curve(0).unwrap();
        assert_eq!(prev, None);
        assert_eq!(next, Some(Point::new(1, 0)));

        let (prev, next) = order.neighbors_on_curve(15).unwrap();
        assert_eq!(prev, Some(order.decode(14).unwrap()));
        assert_eq!(next, None);

        assert!(order.neighbors_on_curve(16).is_err());
    }

    #[test]
    fn test_neighbors_single_cell() {
        let order = GridOrder::new(1u8).unwrap();
        assert_eq!(order.neighbors_on_curve(0).unwrap(), (None, None));
    }

    #[test]
    fn test_iter_size_and_adjacency() {
        let order = GridOrder::new(8u32).unwrap();
        let cells: Vec<_> = order.iter().collect();
        assert_eq!(order.iter().size_hint(), (64, Some(64)));
        assert_eq!(cells.len(), 64);
        assert_eq!(cells.first(), Some(&Point::new(0, 0)));
        assert_eq!(cells.last(), Some(&Point::new(7, 0)));
        for pair in cells.windows(2) {
            if let [a, b] = pair {
                assert_eq!(a.manhattan(b), Some(1), "{a} -> {b}");
            }
        }
    }

    #[test]
    fn test_iter_reversed() {
        let order = GridOrder::new(4u8).unwrap();
        let forward: Vec<_> = order.iter().collect();
        let mut backward: Vec<_> = order.iter().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);

        let mut iter = order.iter();
        assert_eq!(iter.next(), Some(Point::new(0, 0)));
        assert_eq!(iter.next_back(), Some(Point::new(3, 0)));
        assert_eq!(iter.size_hint(), (14, Some(14)));
        assert_eq!(iter.count(), 14);
    }

    #[test]
    fn test_iter_beyond_usize_cells() {
        // 2^80 cells: more than any usize can count
        let order = GridOrder::new(1u128 << 40).unwrap();
        let mut iter = order.iter();
        assert_eq!(iter.size_hint(), (usize::MAX, None));

        let head: Vec<_> = iter.by_ref().take(3).collect();
        assert_eq!(head, vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]);
        assert_eq!(iter.next_back(), Some(Point::new((1u128 << 40) - 1, 0)));
        assert_eq!(iter.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Point::new(1u32, 5).manhattan(&Point::new(4, 1)), Some(7));
        let far = Point::new(u64::MAX, u64::MAX);
        assert_eq!(far.manhattan(&Point::new(0, 0)), Some(2 * u128::from(u64::MAX)));

        let corner = Point::new(u128::MAX, u128::MAX);
        assert_eq!(corner.manhattan(&Point::new(0, 0)), None);
        assert_eq!(Point::new(u128::MAX, 0).manhattan(&Point::new(0, 0)), Some(u128::MAX));
    }

    #[test]
    fn test_display() {
        let order = GridOrder::new(16u32).unwrap();
        assert_eq!(order.to_string(), "16x16");
        assert_eq!(Point::new(3u32, 4).to_string(), "(3, 4)");
    }
}
