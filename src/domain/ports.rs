use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Source of "now" for order timestamps. Local wall-clock time, no offset.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

pub trait StorefrontSettings: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn search_id(&self) -> &str;
    fn catalog_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetches the demo product and describes the response as text.
    async fn fetch_sample_product(&self) -> Result<String>;
}
