//! Grid-quantized cache key for proximity queries.
//!
//! A [`GridCell`] identifies a 0.5°×0.5° geographic bucket (≈55 km at the
//! equator) plus a query radius. Nearby queries collapse to the same key so
//! repeated lookups in the same area reuse one cached scan. A query near a
//! cell boundary may miss a fault just across the boundary that an
//! unquantized query would find; that is an accepted approximation.

use std::fmt;

/// Size of one cache grid cell in degrees.
pub const CELL_SIZE_DEG: f64 = 0.5;

/// A quantized (cell, radius) cache key.
///
/// The cell is identified by the floor of latitude and longitude in units
/// of [`CELL_SIZE_DEG`]; the radius is rounded to whole kilometres.
///
/// # Examples
///
/// ```
/// use faultline::proximity::GridCell;
///
/// let a = GridCell::from_query(37.01, -122.05, 200.0);
/// let b = GridCell::from_query(37.49, -122.31, 200.0);
/// assert_eq!(a, b); // same 0.5° cell, same radius
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Floor of latitude in half-degree units (south edge of the cell).
    pub lat_cell: i32,
    /// Floor of longitude in half-degree units (west edge of the cell).
    pub lng_cell: i32,
    /// Query radius rounded to whole kilometres.
    pub radius_km: u32,
}

impl GridCell {
    /// Quantize a query point and radius into a cache key.
    pub fn from_query(lat: f64, lng: f64, radius_km: f64) -> Self {
        Self {
            lat_cell: (lat / CELL_SIZE_DEG).floor() as i32,
            lng_cell: (lng / CELL_SIZE_DEG).floor() as i32,
            radius_km: radius_km.round().max(0.0) as u32,
        }
    }

    /// Latitude of the cell's south edge in degrees.
    pub fn south_deg(&self) -> f64 {
        self.lat_cell as f64 * CELL_SIZE_DEG
    }

    /// Longitude of the cell's west edge in degrees.
    pub fn west_deg(&self) -> f64 {
        self.lng_cell as f64 * CELL_SIZE_DEG
    }
}

impl fmt::Display for GridCell {
    /// Format as `lat,lng@radius` using the cell's southwest corner,
    /// e.g. `+37.0-122.5@200km`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:+.1}{:+.1}@{}km",
            self.south_deg(),
            self.west_deg(),
            self.radius_km
        )
    }
}
