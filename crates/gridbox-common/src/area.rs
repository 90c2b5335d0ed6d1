//! Geographic area types and operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A latitude/longitude bounding box in degrees.
///
/// Fields are ordered north/west/south/east, the conventional order of
/// area tokens in regridding tools. The eastern edge may exceed 180 so
/// that areas crossing the antimeridian stay contiguous.
///
/// Equality is exact floating-point comparison of all four fields. The
/// Gaussian grid constructors rely on this to gate their whole-globe
/// precondition, so an area computed arithmetically rather than written
/// as the `90/0/-90/360` literals may not compare equal to [`GeographicArea::GLOBE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicArea {
    pub north: f64,
    pub west: f64,
    pub south: f64,
    pub east: f64,
}

impl GeographicArea {
    /// The whole globe: `90/0/-90/360`.
    pub const GLOBE: GeographicArea = GeographicArea {
        north: 90.0,
        west: 0.0,
        south: -90.0,
        east: 360.0,
    };

    /// Create a new area from corner coordinates.
    ///
    /// Requires `-90 <= south <= north <= 90` and `west <= east <= west + 360`.
    pub fn new(north: f64, west: f64, south: f64, east: f64) -> Result<Self, AreaError> {
        let valid_lat = -90.0 <= south && south <= north && north <= 90.0;
        let valid_lon = west <= east && east <= west + 360.0;
        if !valid_lat || !valid_lon {
            return Err(AreaError::InvalidBounds {
                north,
                west,
                south,
                east,
            });
        }

        Ok(Self {
            north,
            west,
            south,
            east,
        })
    }

    /// Latitude extent in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude extent in degrees.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Check if the northern edge sits on the north pole.
    pub fn includes_north_pole(&self) -> bool {
        self.north == 90.0
    }

    /// Check if the southern edge sits on the south pole.
    pub fn includes_south_pole(&self) -> bool {
        self.south == -90.0
    }

    /// Check if the area wraps fully around in longitude, making the
    /// west and east edges the same meridian.
    pub fn is_periodic_west_east(&self) -> bool {
        self.east == self.west + 360.0
    }

    /// Check if the area covers the whole globe.
    pub fn is_global(&self) -> bool {
        self.includes_north_pole() && self.includes_south_pole() && self.is_periodic_west_east()
    }
}

impl Default for GeographicArea {
    fn default() -> Self {
        Self::GLOBE
    }
}

impl FromStr for GeographicArea {
    type Err = AreaError;

    /// Parse an area token: "N/W/S/E", each field a signed decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 4 {
            return Err(AreaError::InvalidFormat(s.to_string()));
        }

        let mut fields = [0.0f64; 4];
        for (field, part) in fields.iter_mut().zip(&parts) {
            *field = part
                .parse()
                .map_err(|_| AreaError::InvalidNumber(part.to_string()))?;
        }

        Self::new(fields[0], fields[1], fields[2], fields[3])
    }
}

impl fmt::Display for GeographicArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.north, self.west, self.south, self.east)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AreaError {
    #[error("Invalid area format: {0}. Expected 'N/W/S/E'")]
    InvalidFormat(String),

    #[error("Invalid number in area: {0}")]
    InvalidNumber(String),

    #[error("Invalid area bounds {north}/{west}/{south}/{east}: expected -90 <= S <= N <= 90 and W <= E <= W + 360")]
    InvalidBounds {
        north: f64,
        west: f64,
        south: f64,
        east: f64,
    },
}
