//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```
//! use hilbert_grid::prelude::*;
//!
//! let order = GridOrder::new(8u64)?;
//! let cells: Vec<Point<u64>> = order.iter().take(4).collect();
//! assert_eq!(cells.len(), 4);
//! # Ok::<(), Error>(())
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Kernel
pub use crate::curve::{CurveInt, d_to_xy, rotate, xy_to_d};

// Checked layer
pub use crate::grid::{CurveIter, GridOrder, Point};
pub use crate::table::{CurveTable, MAX_TABLE_SIDE};
