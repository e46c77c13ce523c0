use std::sync::Arc;

use crate::core::config::MapvetConfig;
use crate::nlp::embedding::{StaticEncoder, TextEncoder};
use crate::sourcing::{MockProductSource, ProductSource};

/// Shared per-process state.
///
/// The encoder is loaded once at startup and is read-only afterwards, so it
/// is shared as a plain `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    pub encoder: Arc<StaticEncoder>,
    pub product_source: Arc<dyn ProductSource>,
    pub config: Arc<MapvetConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("model_id", &self.encoder.model_id())
            .field("embedding_dim", &self.encoder.dimension())
            .finish()
    }
}

impl AppState {
    pub fn new(encoder: Arc<StaticEncoder>, config: MapvetConfig) -> Self {
        let product_source: Arc<dyn ProductSource> = Arc::new(MockProductSource::new());
        Self {
            encoder,
            product_source,
            config: Arc::new(config),
        }
    }

    pub fn with_product_source(mut self, source: Arc<dyn ProductSource>) -> Self {
        self.product_source = source;
        self
    }
}
