//! Fault feature and dataset types.
//!
//! These are our own types, decoupled from any third-party GeoJSON crate.
//! Coordinates are kept as raw JSON values because the upstream dataset is
//! heterogeneous by design: individual vertices may be malformed and are
//! tolerated per-feature rather than failing the whole load.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::DatasetError;

/// Geometry type string this engine processes. Everything else is skipped.
pub const LINESTRING: &str = "LineString";

/// Geometry of a single fault feature.
///
/// `coordinates` is an ordered sequence of vertices. For a well-formed
/// LineString each vertex is a two-element `[longitude, latitude]` array
/// (GeoJSON convention: longitude precedes latitude), but entries are kept
/// raw so malformed vertices can be skipped downstream instead of rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaultGeometry {
    /// Geometry type, e.g. `"LineString"` or `"Point"`.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Raw vertex sequence.
    #[serde(default)]
    pub coordinates: Vec<Value>,
}

/// One fault line from the dataset. Immutable after load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaultFeature {
    /// Line geometry; missing geometry deserializes to an empty default.
    #[serde(default)]
    pub geometry: FaultGeometry,

    /// Free-form properties: `name`, `slip_type`, `net_slip_rate`,
    /// `catalog_name`, and whatever else the catalog carries.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl FaultFeature {
    /// Whether this feature has a geometry the proximity engine can evaluate.
    pub fn is_line(&self) -> bool {
        self.geometry.kind == LINESTRING
    }

    /// Look up a string property, if present and actually a string.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

/// The full ordered fault dataset.
///
/// Loaded once, shared read-only by all queries for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct FaultDataset {
    features: Vec<FaultFeature>,
}

impl FaultDataset {
    /// Create a dataset from an ordered feature sequence.
    pub fn new(features: Vec<FaultFeature>) -> Self {
        Self { features }
    }

    /// Number of features, including non-LineString ones.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the dataset contains no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterate features in original dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &FaultFeature> {
        self.features.iter()
    }
}

/// Top-level GeoJSON feature collection shape.
///
/// We only deserialize `type` and `features`; other fields are ignored.
#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type", default)]
    kind: String,

    #[serde(default)]
    features: Option<Vec<FaultFeature>>,
}

/// Parse a raw GeoJSON payload into a [`FaultDataset`].
///
/// # Errors
///
/// Returns [`DatasetError::FormatError`] when the payload is not valid JSON,
/// is not a `FeatureCollection`, or has no `features` array. Malformed
/// individual features are tolerated; only the top-level shape is validated.
pub fn parse_feature_collection(body: &[u8]) -> Result<FaultDataset, DatasetError> {
    let collection: FeatureCollection =
        serde_json::from_slice(body).map_err(|e| DatasetError::FormatError(e.to_string()))?;

    if collection.kind != "FeatureCollection" {
        return Err(DatasetError::FormatError(format!(
            "expected type \"FeatureCollection\", got \"{}\"",
            collection.kind
        )));
    }

    let features = collection
        .features
        .ok_or_else(|| DatasetError::FormatError("missing features array".to_string()))?;

    Ok(FaultDataset::new(features))
}
