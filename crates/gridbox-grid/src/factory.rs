//! Grid construction from name tokens.

use gridbox_common::GeographicArea;
use tracing::debug;

use crate::error::{GridError, Result};
use crate::grid::Grid;

/// Build a grid from its name token.
///
/// Recognized names:
/// - `O<N>` or `o<N>`: reduced Gaussian grid
/// - `F<N>`: regular Gaussian grid
/// - `LL<Ni>x<Nj>`: regular lat/lon grid
///
/// Number parts must be positive integers without leading zeros; anything
/// else fails with [`GridError::UnrecognizedName`] echoing the token. The
/// Gaussian families additionally require `area` to be the whole globe.
pub fn build(name: &str, area: GeographicArea) -> Result<Grid> {
    if let Some(rest) = name.strip_prefix(['O', 'o']) {
        if let Some(n) = parse_positive(rest) {
            debug!(name, n, "building reduced Gaussian grid");
            return Grid::reduced_gaussian(n, area);
        }
    } else if let Some(rest) = name.strip_prefix('F') {
        if let Some(n) = parse_positive(rest) {
            debug!(name, n, "building regular Gaussian grid");
            return Grid::regular_gaussian(n, area);
        }
    } else if let Some(rest) = name.strip_prefix("LL") {
        if let Some((ni_part, nj_part)) = rest.split_once('x') {
            if let (Some(ni), Some(nj)) = (parse_positive(ni_part), parse_positive(nj_part)) {
                debug!(name, ni, nj, "building regular lat/lon grid");
                return Ok(Grid::regular_latlon(ni, nj, area));
            }
        }
    }

    Err(GridError::UnrecognizedName(name.to_string()))
}

/// Parse a positive integer matching `[1-9][0-9]*`.
fn parse_positive(s: &str) -> Option<usize> {
    if s.is_empty() || s.starts_with('0') || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridKind;

    fn globe() -> GeographicArea {
        GeographicArea::default()
    }

    #[test]
    fn test_build_reduced_gaussian() {
        let grid = build("O12", globe()).unwrap();
        assert_eq!(grid.kind(), GridKind::ReducedGaussian { n: 12 });
        assert_eq!(grid.nj(), 24);
    }

    #[test]
    fn test_build_reduced_gaussian_lowercase() {
        let grid = build("o4", globe()).unwrap();
        assert_eq!(grid.kind(), GridKind::ReducedGaussian { n: 4 });
    }

    #[test]
    fn test_build_regular_gaussian() {
        let grid = build("F4", globe()).unwrap();
        assert_eq!(grid.kind(), GridKind::RegularGaussian { n: 4 });
        assert_eq!(grid.nj(), 8);
        assert_eq!(grid.ni(0), 16);
    }

    #[test]
    fn test_build_regular_latlon() {
        let grid = build("LL3x4", globe()).unwrap();
        assert_eq!(grid.kind(), GridKind::RegularLatLon { ni: 3, nj: 4 });
    }

    #[test]
    fn test_lowercase_f_not_recognized() {
        let result = build("f4", globe());
        assert!(matches!(result, Err(GridError::UnrecognizedName(_))));
    }

    #[test]
    fn test_unknown_prefix() {
        let result = build("Q1", globe());
        assert!(matches!(result, Err(GridError::UnrecognizedName(_))));
    }

    #[test]
    fn test_leading_zero_rejected() {
        let result = build("O012", globe());
        assert!(matches!(result, Err(GridError::UnrecognizedName(_))));
    }

    #[test]
    fn test_missing_digits_rejected() {
        assert!(build("O", globe()).is_err());
        assert!(build("F", globe()).is_err());
        assert!(build("LLx4", globe()).is_err());
        assert!(build("LL3x", globe()).is_err());
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(build("O12b", globe()).is_err());
        assert!(build("LL3x4x5", globe()).is_err());
    }

    #[test]
    fn test_gaussian_requires_global_area() {
        let area = GeographicArea::new(60.0, 0.0, -60.0, 360.0).unwrap();
        let result = build("O4", area);
        assert!(matches!(result, Err(GridError::UnsupportedArea { .. })));
    }

    #[test]
    fn test_latlon_accepts_any_valid_area() {
        let area = GeographicArea::new(60.0, -10.0, 30.0, 40.0).unwrap();
        let grid = build("LL5x3", area).unwrap();
        assert_eq!(grid.area(), &area);
    }
}
