use std::sync::Arc;

use affil_catalog::StaticCatalog;
use affil_core::adapter::{CatalogSource, Notifier, ScriptGenerator};

#[derive(Clone)]
pub struct AppState {
    pub amazon_catalog: Arc<StaticCatalog>,
    pub clickbank: Arc<dyn CatalogSource>,
    pub generator: Arc<dyn ScriptGenerator>,
    pub notifier: Arc<dyn Notifier>,
}
