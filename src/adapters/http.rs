use crate::domain::ports::ProductSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_API_ENDPOINT: &str = "https://dummyjson.com/products/1";

const BODY_PREVIEW_CHARS: usize = 120;

/// One-shot client for the demo products API.
///
/// Owns the `reqwest::Client` it was given. No headers, query parameters or
/// timeout overrides are added, and non-2xx responses are still reported as
/// results; only transport failures become errors.
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn dummyjson(client: Client) -> Self {
        Self::new(client, DEFAULT_API_ENDPOINT)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// First `max_chars` characters of `body`, never splitting a character.
fn body_preview(body: &str, max_chars: usize) -> &str {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[async_trait]
impl ProductSource for ApiClient {
    async fn fetch_sample_product(&self) -> Result<String> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(title) = json.get("title").and_then(|v| v.as_str()) {
                tracing::debug!("Sample product title: {}", title);
            }
        }

        Ok(format!(
            "HTTP {} | Body (primeros {} chars): {}...",
            status.as_u16(),
            BODY_PREVIEW_CHARS,
            body_preview(&body, BODY_PREVIEW_CHARS)
        ))
    }
}
