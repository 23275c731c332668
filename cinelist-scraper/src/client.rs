use tokio::time::Duration;

use crate::config::SourceConfig;
use crate::error::FetchError;
use crate::types::{RawProduct, SearchPayload, SearchResponse, SortType};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// HTTP client for the catalog search endpoint with per-page retry.
pub struct CatalogClient {
    http: reqwest::Client,
    config: SourceConfig,
}

impl CatalogClient {
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    /// Fetch the whole listing, page by page, until the endpoint returns an
    /// empty page. `max_pages` caps the pagination for test runs.
    pub async fn fetch_catalog(
        &self,
        sort: SortType,
        max_pages: Option<usize>,
    ) -> Result<Vec<RawProduct>, FetchError> {
        let mut products = Vec::new();
        let mut page = 0u32;

        loop {
            if let Some(max) = max_pages {
                if page as usize >= max {
                    break;
                }
            }

            let batch = self.fetch_page(sort, page).await?;
            if batch.is_empty() {
                break;
            }
            log::debug!("page {}: {} products", page, batch.len());
            products.extend(batch);
            page += 1;
        }

        log::info!(
            "fetched {} products over {} page(s), sorted by {}",
            products.len(),
            page,
            sort
        );
        Ok(products)
    }

    /// Fetch one page of the listing, retrying transient failures
    /// (network errors and 5xx responses) up to [`MAX_ATTEMPTS`] times.
    pub async fn fetch_page(
        &self,
        sort: SortType,
        page_number: u32,
    ) -> Result<Vec<RawProduct>, FetchError> {
        let payload = SearchPayload {
            with_aggregations: true,
            included_product_categories_uuids: vec![self.config.category_uuid.clone()],
            sort_type: sort,
            page_number,
            page_size: self.config.page_size,
        };

        let mut last_error = String::new();

        for attempt in 1..=MAX_ATTEMPTS {
            if attempt > 1 {
                tokio::time::sleep(RETRY_DELAY).await;
            }

            let resp = match self
                .http
                .post(&self.config.endpoint)
                .json(&payload)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    log::warn!(
                        "page {} attempt {}/{} failed: {}",
                        page_number,
                        attempt,
                        MAX_ATTEMPTS,
                        e
                    );
                    last_error = e.to_string();
                    continue;
                }
            };

            let status = resp.status();
            if status.is_server_error() {
                log::warn!(
                    "page {} attempt {}/{}: HTTP {}",
                    page_number,
                    attempt,
                    MAX_ATTEMPTS,
                    status
                );
                last_error = format!("HTTP {}", status);
                continue;
            }
            if !status.is_success() {
                return Err(FetchError::Status {
                    status: status.as_u16(),
                });
            }

            let text = resp.text().await?;
            let parsed: SearchResponse = serde_json::from_str(&text).map_err(|e| {
                FetchError::Decode(format!("{e}. Response: {}", snippet(&text, 200)))
            })?;
            return Ok(parsed.content.products.content);
        }

        Err(FetchError::RetriesExhausted {
            attempts: MAX_ATTEMPTS,
            last_error,
        })
    }
}

/// At most `limit` bytes of `text`, cut back to a char boundary so error
/// messages never split a multi-byte character (the source serves accented
/// French text).
fn snippet(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_passes_short_text_through() {
        assert_eq!(snippet("Jeu non trouvé", 200), "Jeu non trouvé");
    }

    #[test]
    fn snippet_cuts_back_to_a_char_boundary() {
        // 'é' is two bytes, so byte 200 lands mid-character.
        let body = format!("x{}", "é".repeat(150));
        let cut = snippet(&body, 200);
        assert_eq!(cut.len(), 199);
        assert!(cut.ends_with('é'));
    }
}
