use anyhow::{Context, Result};
use model2vec_rs::model::StaticModel;

/// Text-to-vector encoder seam.
///
/// The production implementation wraps a Model2Vec `StaticModel`; tests
/// substitute a deterministic fake so the scoring pipeline can be exercised
/// without downloading model weights.
pub trait TextEncoder: Send + Sync {
    /// Encode `text` into a fixed-length embedding.
    fn encode(&self, text: &str) -> Vec<f32>;

    /// Embedding dimension this encoder produces.
    fn dimension(&self) -> usize;
}

/// Model2Vec-backed encoder, loaded once per process.
///
/// Loading is expensive (on the order of seconds for a remote model id), so
/// `load` is called exactly once at startup and the result is shared behind
/// an `Arc`. After loading, every use is a pure read of immutable weights.
pub struct StaticEncoder {
    model: StaticModel,
    model_id: String,
    dimension: usize,
}

impl StaticEncoder {
    /// Load the model eagerly and probe its embedding dimension.
    ///
    /// A failure here is fatal to the process; callers should not retry.
    pub fn load(model_id: &str) -> Result<Self> {
        tracing::info!("Loading Model2Vec model: {}", model_id);
        let model = StaticModel::from_pretrained(model_id, None, None, None)
            .with_context(|| format!("Failed to load Model2Vec model from '{}'", model_id))?;
        let probe = model.encode_single("dimension probe");
        let dimension = probe.len();
        tracing::info!(
            "Model2Vec model '{}' ready (embedding_dim: {})",
            model_id,
            dimension
        );
        Ok(Self {
            model,
            model_id: model_id.to_string(),
            dimension,
        })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl TextEncoder for StaticEncoder {
    fn encode(&self, text: &str) -> Vec<f32> {
        self.model.encode_single(text)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

impl std::fmt::Debug for StaticEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticEncoder")
            .field("model_id", &self.model_id)
            .field("dimension", &self.dimension)
            .finish()
    }
}
