//! Slice-based conversion of many cells or distances at once.
//!
//! These are range-checked like [`GridOrder::encode`] and
//! [`GridOrder::decode`]: the first invalid element aborts the batch with
//! its error, leaving earlier output slots written.
//!
//! Everything here computes through the curve kernel and never consults a
//! table. Table-backed batches are a separate API:
//! [`CurveTable::decode_into`](crate::CurveTable::decode_into) and
//! [`CurveTable::encode_into`](crate::CurveTable::encode_into) take the same
//! length-checked slices for `u32` grids up to
//! [`MAX_TABLE_SIDE`](crate::MAX_TABLE_SIDE).

use crate::curve::CurveInt;
use crate::error::{Result, check_len};
use crate::grid::{GridOrder, Point};
use crate::logging::trace;

/// Convert parallel `xs`/`ys` coordinate slices to distances in `out`.
pub fn encode<T: CurveInt>(order: &GridOrder<T>, xs: &[T], ys: &[T], out: &mut [T]) -> Result<()> {
    check_len(xs.len(), ys.len())?;
    check_len(xs.len(), out.len())?;
    trace!(side = %order.side(), count = xs.len(), "batch encode");

    for ((&x, &y), slot) in xs.iter().zip(ys).zip(out.iter_mut()) {
        *slot = order.encode(x, y)?;
    }
    Ok(())
}

/// Convert `distances` to parallel `out_x`/`out_y` coordinate slices.
pub fn decode<T: CurveInt>(
    order: &GridOrder<T>,
    distances: &[T],
    out_x: &mut [T],
    out_y: &mut [T],
) -> Result<()> {
    check_len(distances.len(), out_x.len())?;
    check_len(distances.len(), out_y.len())?;
    trace!(side = %order.side(), count = distances.len(), "batch decode");

    for ((&d, x), y) in distances.iter().zip(out_x.iter_mut()).zip(out_y.iter_mut()) {
        let point = order.decode(d)?;
        *x = point.x;
        *y = point.y;
    }
    Ok(())
}

/// Distances of `points`, in input order.
pub fn encode_points<T: CurveInt>(order: &GridOrder<T>, points: &[Point<T>]) -> Result<Vec<T>> {
    points.iter().map(|&p| order.encode_point(p)).collect()
}

/// Cells at `distances`, in input order.
pub fn decode_points<T: CurveInt>(order: &GridOrder<T>, distances: &[T]) -> Result<Vec<Point<T>>> {
    distances.iter().map(|&d| order.decode(d)).collect()
}

/// Sort `points` into curve order, the usual way to linearize 2D data for
/// locality. Fails if any point lies outside the grid.
pub fn sort_by_curve<T: CurveInt>(order: &GridOrder<T>, points: &mut [Point<T>]) -> Result<()> {
    let keys = encode_points(order, points)?;
    let mut keyed: Vec<(T, Point<T>)> = keys.into_iter().zip(points.iter().copied()).collect();
    keyed.sort_unstable_by_key(|&(d, _)| d);
    for (slot, (_, point)) in points.iter_mut().zip(keyed) {
        *slot = point;
    }
    Ok(())
}
