use thiserror::Error;

/// Failure kinds for a `ProductSource::fetch` call.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The URL could not be resolved to a product.
    #[error("no product found at '{url}'")]
    NotFound { url: String },

    /// The source could not be reached at all.
    #[error("product source unreachable: {0}")]
    Unreachable(String),
}

/// Failure kinds for one analysis run.
///
/// Every variant is terminal for the current analysis only: the loaded
/// embedding model is never invalidated and the next request starts clean.
/// Model-load failures are not represented here — they are fatal at process
/// start and surface through `anyhow` in `main`.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The embedding computation itself failed.
    #[error("embedding computation failed: {0}")]
    Embedding(String),

    #[error(transparent)]
    Source(#[from] SourceError),
}
