//! Resource fetcher trait and HTTP implementation.
//!
//! The [`FaultFetcher`] trait abstracts over how the raw fault feature
//! collection is retrieved, allowing for dependency injection and easier
//! testing with mock fetchers. The [`HttpFaultFetcher`] implementation
//! downloads the GeoJSON payload via `reqwest`.

use std::future::Future;
use std::time::Duration;

use super::error::DatasetError;
use super::model::{parse_feature_collection, FaultDataset};

/// Default location of the fault line feature collection (GEM Global
/// Active Faults, harmonized GeoJSON).
pub const DEFAULT_FAULTS_URL: &str = "https://raw.githubusercontent.com/GEMScienceTools/gem-global-active-faults/master/geojson/gem_active_faults_harmonized.geojson";

/// Default HTTP timeout for fetching the dataset. The payload is large
/// (tens of megabytes), so this is generous.
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Trait for retrieving and parsing the fault feature collection.
///
/// Implementations fetch the payload from a fixed logical location and
/// parse it into the [`FaultDataset`] shape.
pub trait FaultFetcher: Send + Sync {
    /// Fetch and parse the full fault dataset.
    ///
    /// # Returns
    ///
    /// The parsed dataset, or a [`DatasetError`] describing whether the
    /// resource was unreachable or the payload structurally invalid.
    fn fetch(&self) -> impl Future<Output = Result<FaultDataset, DatasetError>> + Send;
}

/// HTTP fetcher for the fault dataset.
///
/// Uses a reusable `reqwest::Client` with connection pooling and a timeout.
pub struct HttpFaultFetcher {
    /// Reusable HTTP client.
    http: reqwest::Client,

    /// URL of the GeoJSON feature collection.
    url: String,
}

impl HttpFaultFetcher {
    /// Create a fetcher for a specific dataset URL.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::LoadError`] if the HTTP client cannot be
    /// constructed.
    pub fn new(url: impl Into<String>) -> Result<Self, DatasetError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| DatasetError::LoadError(e.to_string()))?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Create a fetcher for the default fault catalog URL.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::LoadError`] if the HTTP client cannot be
    /// constructed.
    pub fn default_catalog() -> Result<Self, DatasetError> {
        Self::new(DEFAULT_FAULTS_URL)
    }

    /// The configured dataset URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FaultFetcher for HttpFaultFetcher {
    async fn fetch(&self) -> Result<FaultDataset, DatasetError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DatasetError::LoadError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DatasetError::LoadError(format!(
                "HTTP {} from {}",
                response.status(),
                self.url
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DatasetError::LoadError(e.to_string()))?;

        let dataset = parse_feature_collection(&bytes)?;

        tracing::debug!(
            feature_count = dataset.len(),
            bytes = bytes.len(),
            "Fault dataset fetched"
        );

        Ok(dataset)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Mock fetcher for testing: returns a canned payload parse result.
    pub struct MockFaultFetcher {
        pub payload: Result<&'static [u8], DatasetError>,
    }

    impl FaultFetcher for MockFaultFetcher {
        async fn fetch(&self) -> Result<FaultDataset, DatasetError> {
            match &self.payload {
                Ok(body) => parse_feature_collection(body),
                Err(e) => Err(e.clone()),
            }
        }
    }

    #[test]
    fn test_http_fetcher_construction() {
        let fetcher = HttpFaultFetcher::default_catalog().unwrap();
        assert_eq!(fetcher.url(), DEFAULT_FAULTS_URL);

        let fetcher = HttpFaultFetcher::new("http://example.com/faults.geojson").unwrap();
        assert_eq!(fetcher.url(), "http://example.com/faults.geojson");
    }

    #[tokio::test]
    async fn test_mock_fetcher_success() {
        let mock = MockFaultFetcher {
            payload: Ok(br#"{"type": "FeatureCollection", "features": []}"#),
        };

        let dataset = mock.fetch().await.unwrap();
        assert!(dataset.is_empty());
    }

    #[tokio::test]
    async fn test_mock_fetcher_transport_error() {
        let mock = MockFaultFetcher {
            payload: Err(DatasetError::LoadError("connection refused".to_string())),
        };

        let result = mock.fetch().await;
        assert!(matches!(result, Err(DatasetError::LoadError(_))));
    }

    #[tokio::test]
    async fn test_mock_fetcher_malformed_payload() {
        let mock = MockFaultFetcher {
            payload: Ok(br#"{"type": "NotACollection"}"#),
        };

        let result = mock.fetch().await;
        assert!(matches!(result, Err(DatasetError::FormatError(_))));
    }
}
