//! Error types for grid construction and boundary merging.

use gridbox_common::area::AreaError;
use gridbox_common::GeographicArea;
use thiserror::Error;

/// Errors that can occur while building grids or merging boundaries.
#[derive(Error, Debug)]
pub enum GridError {
    /// The area token failed to parse or violated the geographic invariants.
    #[error(transparent)]
    Area(#[from] AreaError),

    /// The grid name matched none of the supported families.
    #[error("Unrecognized grid '{0}'")]
    UnrecognizedName(String),

    /// A Gaussian-family grid was requested over a non-global area.
    #[error("Grid '{name}' requires the global area, got {area}")]
    UnsupportedArea {
        name: String,
        area: GeographicArea,
    },

    /// A merge input was not strictly descending. The boundary generators
    /// guarantee ordering, so this indicates a caller bug rather than a
    /// recoverable input condition.
    #[error("Boundary run from origin {origin} is not strictly descending")]
    UnsortedBoundaries { origin: u8 },
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
