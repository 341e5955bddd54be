//! Error types for dataset loading.

use thiserror::Error;

/// Errors that can occur while loading the fault dataset.
///
/// Both variants are confined to the dataset layer; the proximity engine
/// converts them into empty results rather than propagating them.
#[derive(Debug, Clone, Error)]
pub enum DatasetError {
    /// The dataset resource could not be fetched (transport failure).
    #[error("Failed to load fault dataset: {0}")]
    LoadError(String),

    /// The payload parsed, but lacks the expected feature collection shape.
    #[error("Fault dataset is not a valid feature collection: {0}")]
    FormatError(String),
}
