//! Origin-tagged boundary sequences and their ordered merge.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{GridError, Result};
use crate::grid::Grid;

/// Origin tag for boundaries of the source (input) grid.
pub const ORIGIN_SOURCE: u8 = 0;
/// Origin tag for boundaries of the target (output) grid.
pub const ORIGIN_TARGET: u8 = 1;

/// One row boundary tagged with the grid that produced it.
///
/// The index records the boundary's position within its own grid's
/// sequence; it carries no meaning beyond tie-breaking and bookkeeping
/// for the intersection stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Midpoint {
    /// Boundary latitude in degrees.
    pub coordinate: f64,
    /// Which grid produced the boundary: 0 = source, 1 = target.
    pub origin: u8,
    /// Position within the producing grid's own boundary sequence.
    pub index: usize,
}

impl fmt::Display for Midpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.coordinate, self.origin)
    }
}

/// Merge two strictly descending boundary runs into one descending,
/// origin-tagged sequence.
///
/// Equal coordinates keep the source entry ahead of the target entry, and
/// entries sharing an origin keep their relative order: a stable linear
/// merge of two pre-sorted runs, not a re-sort. The output length is
/// always `source.len() + target.len()`.
pub fn merge(source: &[f64], target: &[f64]) -> Result<Vec<Midpoint>> {
    check_descending(source, ORIGIN_SOURCE)?;
    check_descending(target, ORIGIN_TARGET)?;

    let mut merged = Vec::with_capacity(source.len() + target.len());
    let mut i = 0;
    let mut j = 0;

    while i < source.len() && j < target.len() {
        // On ties the source entry goes first
        if source[i] >= target[j] {
            merged.push(Midpoint {
                coordinate: source[i],
                origin: ORIGIN_SOURCE,
                index: i,
            });
            i += 1;
        } else {
            merged.push(Midpoint {
                coordinate: target[j],
                origin: ORIGIN_TARGET,
                index: j,
            });
            j += 1;
        }
    }

    for (k, &coordinate) in source[i..].iter().enumerate() {
        merged.push(Midpoint {
            coordinate,
            origin: ORIGIN_SOURCE,
            index: i + k,
        });
    }
    for (k, &coordinate) in target[j..].iter().enumerate() {
        merged.push(Midpoint {
            coordinate,
            origin: ORIGIN_TARGET,
            index: j + k,
        });
    }

    Ok(merged)
}

/// Merge the row boundaries of two grids, tagging the first as source (0)
/// and the second as target (1).
pub fn merge_grids(source: &Grid, target: &Grid) -> Result<Vec<Midpoint>> {
    let merged = merge(&source.row_boundaries(), &target.row_boundaries())?;
    debug!(entries = merged.len(), "merged row boundaries");
    Ok(merged)
}

fn check_descending(run: &[f64], origin: u8) -> Result<()> {
    if run.windows(2).any(|pair| pair[0] <= pair[1]) {
        return Err(GridError::UnsortedBoundaries { origin });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(merged: &[Midpoint]) -> Vec<f64> {
        merged.iter().map(|m| m.coordinate).collect()
    }

    #[test]
    fn test_merge_interleaves_descending() {
        let merged = merge(&[90.0, 30.0, -30.0, -90.0], &[90.0, 0.0, -90.0]).unwrap();
        assert_eq!(merged.len(), 7);
        assert_eq!(
            coords(&merged),
            vec![90.0, 90.0, 30.0, 0.0, -30.0, -90.0, -90.0]
        );
    }

    #[test]
    fn test_merge_ties_source_first() {
        let merged = merge(&[90.0, 30.0, -30.0, -90.0], &[90.0, 0.0, -90.0]).unwrap();
        assert_eq!((merged[0].coordinate, merged[0].origin), (90.0, 0));
        assert_eq!((merged[1].coordinate, merged[1].origin), (90.0, 1));
        assert_eq!((merged[5].coordinate, merged[5].origin), (-90.0, 0));
        assert_eq!((merged[6].coordinate, merged[6].origin), (-90.0, 1));
    }

    #[test]
    fn test_merge_indices_count_within_origin() {
        let merged = merge(&[90.0, 30.0], &[60.0, 0.0]).unwrap();
        let source_indices: Vec<usize> =
            merged.iter().filter(|m| m.origin == 0).map(|m| m.index).collect();
        let target_indices: Vec<usize> =
            merged.iter().filter(|m| m.origin == 1).map(|m| m.index).collect();
        assert_eq!(source_indices, vec![0, 1]);
        assert_eq!(target_indices, vec![0, 1]);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let merged = merge(&[45.0, 15.0, -15.0], &[]).unwrap();
        assert_eq!(coords(&merged), vec![45.0, 15.0, -15.0]);
        assert!(merged.iter().all(|m| m.origin == ORIGIN_SOURCE));
        assert_eq!(merged[2].index, 2);
    }

    #[test]
    fn test_merge_unsorted_input_fails() {
        let result = merge(&[0.0, 10.0], &[90.0, -90.0]);
        assert!(matches!(
            result,
            Err(GridError::UnsortedBoundaries { origin: 0 })
        ));
    }

    #[test]
    fn test_merge_repeated_value_fails() {
        // Strictly descending means no duplicates within one run
        let result = merge(&[10.0, 10.0], &[90.0, -90.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_midpoint_display() {
        let m = Midpoint {
            coordinate: 45.5,
            origin: 1,
            index: 3,
        };
        assert_eq!(m.to_string(), "45.5/1");
    }
}
