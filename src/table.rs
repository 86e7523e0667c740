//! Precomputed lookup tables for small grids.
//!
//! A [`CurveTable`] stores both directions of the mapping for one grid so
//! that each conversion is a single array read. Tables are immutable once
//! built and can be shared between threads.

use crate::curve::d_to_xy;
use crate::error::{Error, Result, check_len};
use crate::grid::{GridOrder, Point};
use crate::logging::{debug, info, warn};

/// Largest side a table can be built for (16M cells, 128 MiB).
pub const MAX_TABLE_SIDE: u32 = 4096;

/// Sides above this still build, but are logged as large allocations.
const LARGE_TABLE_SIDE: u32 = 1024;

/// Hilbert curve lookup table for a specific grid.
/// Stores both forward (d to xy) and inverse (xy to d) mappings for O(1) access.
#[derive(Debug, Clone)]
pub struct CurveTable {
    order: GridOrder<u32>,
    /// Maps distance to packed (x, y) coordinates (x in low 16 bits, y in high 16 bits).
    d_to_xy: Vec<u32>,
    /// Maps (x, y) to distance. Indexed as `xy_to_d[y * side + x]`.
    xy_to_d: Vec<u32>,
}

impl CurveTable {
    /// Build the tables for `order`.
    pub fn new(order: GridOrder<u32>) -> Result<Self> {
        let side = order.side();
        if side > MAX_TABLE_SIDE {
            return Err(Error::TableTooLarge {
                side: u128::from(side),
                max: MAX_TABLE_SIDE,
            });
        }
        if side > LARGE_TABLE_SIDE {
            warn!(side = side, "building a large curve lookup table");
        }

        debug!(side = side, "building curve lookup table");

        let size = order.cells() as usize;
        let mut forward = Vec::with_capacity(size);
        let mut inverse = vec![0u32; size];

        for d in 0..order.cells() {
            let (x, y) = d_to_xy(side, d);
            // Pack x and y into a single u32 (each fits in 16 bits for side <= 4096)
            forward.push(x | (y << 16));
            if let Some(slot) = inverse.get_mut((y * side + x) as usize) {
                *slot = d;
            }
        }

        let table = Self {
            order,
            d_to_xy: forward,
            xy_to_d: inverse,
        };
        info!(
            side = side,
            bytes = table.memory_bytes(),
            "curve lookup table ready"
        );
        Ok(table)
    }

    /// Validate `side` and build its table.
    pub fn with_side(side: u32) -> Result<Self> {
        Self::new(GridOrder::new(side)?)
    }

    /// The grid this table covers.
    pub fn order(&self) -> GridOrder<u32> {
        self.order
    }

    /// Heap bytes held by both tables.
    pub fn memory_bytes(&self) -> usize {
        (self.d_to_xy.len() + self.xy_to_d.len()) * std::mem::size_of::<u32>()
    }

    /// Look up (x, y) from distance. `None` past the end of the curve.
    #[inline(always)]
    pub fn lookup_d(&self, d: u32) -> Option<Point<u32>> {
        self.d_to_xy
            .get(d as usize)
            .map(|&packed| Point::new(packed & 0xFFFF, packed >> 16))
    }

    /// Look up distance from (x, y). `None` outside the grid.
    #[inline(always)]
    pub fn lookup_xy(&self, x: u32, y: u32) -> Option<u32> {
        let side = self.order.side();
        if x < side && y < side {
            self.xy_to_d.get((y * side + x) as usize).copied()
        } else {
            None
        }
    }

    /// Decode every distance in `distances` into `out`.
    pub fn decode_into(&self, distances: &[u32], out: &mut [Point<u32>]) -> Result<()> {
        check_len(distances.len(), out.len())?;
        for (&d, slot) in distances.iter().zip(out.iter_mut()) {
            *slot = self.lookup_d(d).ok_or(Error::DistanceOutOfRange {
                distance: u128::from(d),
                cells: u128::from(self.order.cells()),
            })?;
        }
        Ok(())
    }

    /// Encode every point in `points` into `out`.
    pub fn encode_into(&self, points: &[Point<u32>], out: &mut [u32]) -> Result<()> {
        check_len(points.len(), out.len())?;
        for (point, slot) in points.iter().zip(out.iter_mut()) {
            *slot = self
                .lookup_xy(point.x, point.y)
                .ok_or(Error::CoordinateOutOfRange {
                    x: u128::from(point.x),
                    y: u128::from(point.y),
                    side: u128::from(self.order.side()),
                })?;
        }
        Ok(())
    }
}
