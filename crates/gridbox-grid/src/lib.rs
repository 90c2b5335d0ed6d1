//! Grid families and row-boundary merging for grid-box intersection.
//!
//! This crate models the latitude/longitude grids exchanged by a regridding
//! pipeline and computes the merged, origin-tagged sequence of row-boundary
//! latitudes that the box-intersection stage consumes:
//!
//! ```text
//! grid name + area
//!      │
//!      ▼
//! factory::build ──► Grid (per-row cell counts)
//!      │
//!      ├─► Grid::row_boundaries (strictly descending latitudes)
//!      │
//!      ▼
//! merge::merge_grids ──► Vec<Midpoint> (descending, tagged, stable)
//! ```
//!
//! # Example
//!
//! ```
//! use gridbox_common::GeographicArea;
//! use gridbox_grid::{factory, merge};
//!
//! let source = factory::build("O4", GeographicArea::default())?;
//! let target = factory::build("LL8x4", GeographicArea::default())?;
//!
//! let boundaries = merge::merge_grids(&source, &target)?;
//! assert_eq!(boundaries.len(), source.nj() + 1 + target.nj() + 1);
//! # Ok::<(), gridbox_grid::GridError>(())
//! ```

pub mod error;
pub mod factory;
pub mod grid;
pub mod merge;

// Re-export commonly used types at crate root
pub use error::{GridError, Result};
pub use grid::{Grid, GridKind};
pub use merge::{Midpoint, ORIGIN_SOURCE, ORIGIN_TARGET};
