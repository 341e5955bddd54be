//! Minimum distance from a query point to a fault's vertex sequence.

use serde_json::Value;

use crate::geo::distance_km;

/// Bounding-box prefilter buffer in degrees.
///
/// Any vertex further than this from the query point on either axis is
/// discarded without computing a true distance. The buffer (3° ≈ 333 km)
/// exceeds the maximum supported query radius (200 km ≈ 1.8°) with margin,
/// so no vertex that could be within radius is ever discarded.
pub const BOUNDING_BOX_DEG: f64 = 3.0;

/// Extract a `[longitude, latitude]` vertex from a raw coordinate entry.
///
/// Entries that are not arrays of at least two numbers yield `None`.
fn vertex_lng_lat(entry: &Value) -> Option<(f64, f64)> {
    let pair = entry.as_array()?;
    let lng = pair.first()?.as_f64()?;
    let lat = pair.get(1)?.as_f64()?;
    Some((lng, lat))
}

/// Minimum great-circle distance from a query point to any fault vertex.
///
/// Pure function. Vertices outside the bounding-box prefilter are skipped
/// before the comparatively expensive haversine computation; fault lines
/// may carry hundreds of vertices and most are geographically irrelevant
/// to a given query. Malformed coordinate entries are skipped silently.
///
/// # Arguments
///
/// * `lat` - Query latitude in degrees
/// * `lng` - Query longitude in degrees
/// * `coordinates` - Raw vertex sequence in `[longitude, latitude]` order
///
/// # Returns
///
/// Minimum distance in kilometres among surviving vertices, or
/// `f64::INFINITY` when no vertex survives. Infinity is the normal outcome
/// for distant faults, not a failure.
pub fn distance_to_query(lat: f64, lng: f64, coordinates: &[Value]) -> f64 {
    let mut min_distance = f64::INFINITY;

    for entry in coordinates {
        let Some((vertex_lng, vertex_lat)) = vertex_lng_lat(entry) else {
            continue;
        };

        // Cheap prefilter before the trigonometric distance
        if (vertex_lat - lat).abs() > BOUNDING_BOX_DEG || (vertex_lng - lng).abs() > BOUNDING_BOX_DEG
        {
            continue;
        }

        let distance = distance_km((lat, lng), (vertex_lat, vertex_lng));
        if distance < min_distance {
            min_distance = distance;
        }
    }

    min_distance
}
