use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::rating::Rating;

/// Structured product data as returned by a `ProductSource`.
///
/// Immutable once produced; consumed by exactly one analysis and never
/// persisted. `price` is display-formatted (currency symbol included) and is
/// deliberately not parsed numerically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub title: String,
    pub price: String,
    pub specs: Vec<String>,
    pub image_tags: Vec<String>,
}

/// The closed set of listing attributes the validator scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    Title,
    Specifications,
    Images,
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Attribute::Title => "Title",
            Attribute::Specifications => "Specifications",
            Attribute::Images => "Images",
        };
        f.write_str(s)
    }
}

/// One scored row of the validation report.
///
/// `score` is the raw full-precision value; rounding to two decimals is a
/// presentation concern handled at the display boundary, never here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeResult {
    pub attribute: Attribute,
    /// Human-readable rendering of the relevant `ProductRecord` field.
    pub observed_value: String,
    pub score: f32,
    pub rating: Rating,
    /// Static explanatory text for this attribute's scoring method.
    pub reason: String,
}

/// Ordered validation report: exactly three rows, always in the order
/// Title, Specifications, Images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub rows: Vec<AttributeResult>,
}

impl Report {
    /// Number of attribute rows every report carries.
    pub const ROW_COUNT: usize = 3;
}

// ───────────────────────────────────────────────────────────────────────────
// HTTP request/response types
// ───────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub product_url: String,
    pub category_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub product: ProductRecord,
    pub category_name: String,
    pub rows: Vec<AttributeResult>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
