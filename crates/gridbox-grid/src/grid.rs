//! Grid family definitions and row geometry.

use gridbox_common::{linspace, GeographicArea};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Which of the supported grid families a grid belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridKind {
    /// Regular latitude/longitude grid: `nj` rows of `ni` cells each.
    RegularLatLon { ni: usize, nj: usize },
    /// Regular Gaussian grid: `2n` rows of `4n` cells each.
    RegularGaussian { n: usize },
    /// Reduced ("octahedral") Gaussian grid: `2n` rows whose cell count
    /// grows from 20 at the poles in steps of 4 towards the equator.
    ReducedGaussian { n: usize },
}

/// A discretized grid over a geographic area.
///
/// Rows run north to south. Row `j` spans a band of constant latitude and
/// holds `ni(j)` cells along longitude. Grids are built once, by
/// [`crate::factory::build`] or the family constructors below, and are
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Grid {
    kind: GridKind,
    area: GeographicArea,
    row_counts: Vec<usize>,
}

impl Grid {
    /// Create a regular lat/lon grid of `nj` rows with `ni` cells each.
    pub fn regular_latlon(ni: usize, nj: usize, area: GeographicArea) -> Self {
        debug_assert!(ni > 0 && nj > 0);
        Self {
            kind: GridKind::RegularLatLon { ni, nj },
            area,
            row_counts: vec![ni; nj],
        }
    }

    /// Create a regular Gaussian grid of `2n` rows with `4n` cells each.
    ///
    /// Only the whole-globe area is supported; the comparison is exact,
    /// so the area must carry the `90/0/-90/360` literals.
    pub fn regular_gaussian(n: usize, area: GeographicArea) -> Result<Self> {
        debug_assert!(n > 0);
        Self::require_global(format!("F{n}"), area)?;
        Ok(Self {
            kind: GridKind::RegularGaussian { n },
            area,
            row_counts: vec![4 * n; 2 * n],
        })
    }

    /// Create a reduced Gaussian grid of `2n` rows.
    ///
    /// Row `i` counted from either pole holds `20 + 4i` cells, so counts
    /// grow towards the equator and are symmetric about it. Only the
    /// whole-globe area is supported, compared exactly.
    pub fn reduced_gaussian(n: usize, area: GeographicArea) -> Result<Self> {
        debug_assert!(n > 0);
        Self::require_global(format!("O{n}"), area)?;

        let mut row_counts = vec![0; 2 * n];
        for i in 0..n {
            let count = 20 + 4 * i;
            row_counts[i] = count;
            row_counts[2 * n - 1 - i] = count;
        }

        Ok(Self {
            kind: GridKind::ReducedGaussian { n },
            area,
            row_counts,
        })
    }

    fn require_global(name: String, area: GeographicArea) -> Result<()> {
        if area != GeographicArea::GLOBE {
            return Err(GridError::UnsupportedArea { name, area });
        }
        Ok(())
    }

    /// The grid family.
    pub fn kind(&self) -> GridKind {
        self.kind
    }

    /// The area this grid covers.
    pub fn area(&self) -> &GeographicArea {
        &self.area
    }

    /// Number of latitude rows.
    pub fn nj(&self) -> usize {
        self.row_counts.len()
    }

    /// Number of longitude cells in row `j`.
    pub fn ni(&self, j: usize) -> usize {
        self.row_counts[j]
    }

    /// Per-row cell counts, north to south.
    pub fn row_counts(&self) -> &[usize] {
        &self.row_counts
    }

    /// Total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.row_counts.iter().sum()
    }

    /// Latitudes bounding every row: `nj + 1` values, strictly decreasing
    /// from `area.north` to `area.south`.
    ///
    /// Regular lat/lon rows are bounded by evenly spaced latitudes. The
    /// Gaussian families place boundaries halfway between adjacent row
    /// centers, with the outermost boundaries pinned to the area edges.
    pub fn row_boundaries(&self) -> Vec<f64> {
        match self.kind {
            GridKind::RegularLatLon { nj, .. } => {
                linspace(self.area.north, self.area.south, nj + 1, true)
            }
            GridKind::RegularGaussian { n } | GridKind::ReducedGaussian { n } => {
                let centers = gaussian_row_centers(n);

                let mut boundaries = Vec::with_capacity(centers.len() + 1);
                boundaries.push(self.area.north);
                for pair in centers.windows(2) {
                    boundaries.push(0.5 * (pair[0] + pair[1]));
                }
                boundaries.push(self.area.south);
                boundaries
            }
        }
    }

    /// Longitude cell centers for row `j`.
    ///
    /// A fully periodic area omits the east edge: the last column wraps
    /// around to the west edge instead of duplicating it.
    pub fn lon_centers(&self, j: usize) -> Vec<f64> {
        let endpoint = !self.area.is_periodic_west_east();
        linspace(self.area.west, self.area.east, self.ni(j), endpoint)
    }
}

/// Approximate Gaussian row-center latitudes for `2n` rows, north to south.
///
/// `90 - (90/n)(i + 0.5)` is symmetric about the equator and close to, but
/// not the same as, the true Gaussian quadrature abscissae. The boundary
/// placement is defined on this approximation; substituting the exact
/// abscissae would shift every interior boundary.
fn gaussian_row_centers(n: usize) -> Vec<f64> {
    let step = 90.0 / n as f64;
    (0..2 * n)
        .map(|i| 90.0 - step * (i as f64 + 0.5))
        .collect()
}
