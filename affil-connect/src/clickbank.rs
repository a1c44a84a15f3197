use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde_json::Value;

use affil_catalog::StaticCatalog;
use affil_core::adapter::CatalogSource;
use affil_core::{CoreError, CoreResult};

/// Live adapter for the remote affiliate catalog API.
///
/// One authenticated GET per call, no retries. Transport errors, non-2xx
/// statuses, malformed bodies and empty listings all surface as
/// `CoreError::RemoteFetch`.
pub struct ClickBankClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ClickBankClient {
    pub fn new(api_url: &str, api_key: &str) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| CoreError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// The upstream returns either a bare array or a `{products: [...]}`
    /// wrapper depending on the endpoint version.
    fn extract_products(body: &Value) -> Option<&Vec<Value>> {
        match body {
            Value::Array(items) => Some(items),
            Value::Object(map) => map.get("products").and_then(Value::as_array),
            _ => None,
        }
    }
}

#[async_trait]
impl CatalogSource for ClickBankClient {
    async fn fetch_random_product(&self) -> CoreResult<Value> {
        let response = self
            .client
            .get(&self.api_url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| CoreError::RemoteFetch(format!("Catalog request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::RemoteFetch(format!(
                "Catalog API returned {status}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| CoreError::RemoteFetch(format!("Invalid catalog response body: {e}")))?;

        let products = Self::extract_products(&body).ok_or_else(|| {
            CoreError::RemoteFetch("Catalog response contained no product list".to_string())
        })?;
        if products.is_empty() {
            return Err(CoreError::RemoteFetch(
                "Catalog returned an empty product list".to_string(),
            ));
        }

        let idx = rand::thread_rng().gen_range(0..products.len());
        Ok(products[idx].clone())
    }
}

/// Mock adapter backed by the fixed ClickBank list. Selected instead of the
/// live client when `adapters.mode = "mock"`.
pub struct MockCatalogSource {
    catalog: StaticCatalog,
}

impl MockCatalogSource {
    pub fn new(catalog: StaticCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_random_product(&self) -> CoreResult<Value> {
        let product = self
            .catalog
            .pick_random()
            .map_err(|e| CoreError::Configuration(e.to_string()))?;

        serde_json::to_value(product)
            .map_err(|e| CoreError::Internal(format!("Product serialization failed: {e}")))
    }
}
