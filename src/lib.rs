pub mod core;
pub mod nlp;
pub mod scoring;
pub mod sourcing;

// --- Primary core exports ---
pub use core::types;
pub use core::types::*;
pub use core::AppState;

pub use core::error::{AnalysisError, SourceError};
pub use nlp::embedding::{StaticEncoder, TextEncoder};
pub use scoring::report::ReportBuilder;
pub use sourcing::{MockProductSource, ProductSource};
