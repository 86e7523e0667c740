//! Hilbert curve mapping between 1D distances and 2D grid cells.
//!
//! This library converts between a position `d` along a discrete Hilbert
//! curve and the cell `(x, y)` it visits on an `n x n` grid, `n` a power of
//! two. Consecutive distances always map to adjacent cells, so ordering 2D
//! data by distance keeps neighbours close together in memory.
//!
//! # Quick Start
//!
//! ```
//! use hilbert_grid::prelude::*;
//!
//! // Unchecked kernel: the caller guarantees the preconditions
//! let d = xy_to_d(16u32, 3, 5);
//! assert_eq!(d_to_xy(16u32, d), (3, 5));
//!
//! // Checked API: the grid side is validated once
//! let order = GridOrder::new(16u32)?;
//! assert_eq!(order.encode(3, 5)?, d);
//! assert!(order.encode(16, 0).is_err());
//! # Ok::<(), hilbert_grid::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`curve`] - The conversion kernel and its integer abstraction (always available)
//! - [`grid`] - Validated grid orders, points and curve iteration
//! - [`table`] - Precomputed lookup tables for small grids
//! - [`batch`] - Slice-based conversions
//! - [`render`] - Text rendering of the curve path
//! - [`config`] - TOML defaults for the CLI (requires `cli` feature)
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `serde` - Derive `Serialize`/`Deserialize` for [`Point`]
//! - `cli` - Enable the `hilbert` command-line binary
//! - `full` - Enable all features

pub mod batch;
#[cfg(feature = "cli")]
pub mod config;
pub mod curve;
pub mod grid;
mod logging;
pub mod prelude;
pub mod render;
pub mod table;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export the kernel at crate root for convenience
pub use curve::{CurveInt, d_to_xy, rotate, xy_to_d};

pub use grid::{CurveIter, GridOrder, Point};
pub use table::{CurveTable, MAX_TABLE_SIDE};
