use async_trait::async_trait;
use url::Url;

use crate::core::error::SourceError;
use crate::core::types::ProductRecord;

/// Capability seam for obtaining product data from a URL.
///
/// The shipped implementation is a mock; a real scraping integration plugs in
/// here without touching the scoring pipeline.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ProductRecord, SourceError>;
}

/// Stand-in product source returning a fixed record for any well-formed URL.
///
/// The URL is still parsed so malformed input exercises the `NotFound` error
/// path the trait contract requires of real implementations.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProductSource;

impl MockProductSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProductSource for MockProductSource {
    async fn fetch(&self, url: &str) -> Result<ProductRecord, SourceError> {
        if Url::parse(url).is_err() {
            return Err(SourceError::NotFound {
                url: url.to_string(),
            });
        }

        Ok(ProductRecord {
            title: "HDPE Plastic Crate - 45L".to_string(),
            price: "₹180".to_string(),
            specs: vec![
                "Material: HDPE".to_string(),
                "Capacity: 45L".to_string(),
                "Color: Blue".to_string(),
            ],
            image_tags: vec!["side_view".to_string(), "top_view".to_string()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn well_formed_url_yields_the_fixture_record() {
        let source = MockProductSource::new();
        let record = source
            .fetch("https://yourb2b.com/product/123")
            .await
            .unwrap();
        assert_eq!(record.title, "HDPE Plastic Crate - 45L");
        assert_eq!(record.specs.len(), 3);
        assert_eq!(record.image_tags.len(), 2);
    }

    #[tokio::test]
    async fn malformed_url_is_not_found() {
        let source = MockProductSource::new();
        let err = source.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }
}
