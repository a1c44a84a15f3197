use async_trait::async_trait;
use serde_json::Value;

use crate::generation::GenerationResult;
use crate::CoreResult;

/// Source of affiliate products for the marketplace routes.
///
/// Remote implementations return the upstream record untouched, so the
/// payload stays an opaque `Value` rather than a typed product.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_random_product(&self) -> CoreResult<Value>;
}

/// Turns a product record into promotional video copy.
#[async_trait]
pub trait ScriptGenerator: Send + Sync {
    async fn generate_script(
        &self,
        product: &Value,
        template: Option<&str>,
    ) -> CoreResult<GenerationResult>;
}

/// Delivers a notification to the configured channel.
///
/// Callers only observe whether the adapter call itself succeeded; delivery
/// beyond that point is fire-and-forget.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(
        &self,
        kind: Option<&str>,
        message: &str,
        data: Option<&Value>,
    ) -> CoreResult<()>;
}
