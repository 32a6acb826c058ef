//! Document fetch seam. The surrounding system owns where documents live;
//! the engine only needs raw bytes for a locator and tolerates any failure.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::EngineError;

/// Supplies the raw byte content of a document given its opaque locator.
///
/// Carried as `Arc<dyn DocumentStore>` by the orchestrator. Implementations
/// should impose their own timeouts; a timeout surfaces as a fetch error and
/// therefore as the text-recovery fallback path, never as a batch failure.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<Bytes, EngineError>;
}

/// HTTP-backed document store for URL locators.
#[derive(Clone)]
pub struct HttpDocumentStore {
    client: reqwest::Client,
}

impl HttpDocumentStore {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Use a caller-configured client, e.g. with a request timeout.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn fetch(&self, locator: &str) -> Result<Bytes, EngineError> {
        let response = self
            .client
            .get(locator)
            .send()
            .await
            .map_err(|e| EngineError::Fetch(format!("GET {locator}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Fetch(format!("GET {locator}: status {status}")));
        }

        response
            .bytes()
            .await
            .map_err(|e| EngineError::Fetch(format!("reading body of {locator}: {e}")))
    }
}
