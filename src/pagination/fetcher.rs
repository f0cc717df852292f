//! Paginated fetcher
//!
//! Drives the request loop for one logical query and aggregates every page.

use super::types::{NextPage, PageTally, PaginationConfig};
use crate::error::Result;
use crate::http::{decode_body, HttpClient, RequestConfig};
use crate::response::ApiResponse;
use crate::types::Method;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Upper bound on pages requested for one query
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Fetches every page of a list endpoint
///
/// The aggregate for a list endpoint is the concatenation of each page's
/// items in fetch order. An endpoint that answers with an object on the
/// first page yields that object unchanged. Any failed page fails the whole
/// query; items from earlier pages are dropped.
#[derive(Debug, Clone)]
pub struct PaginatedFetcher {
    client: HttpClient,
    pagination: PaginationConfig,
    max_pages: u32,
}

impl PaginatedFetcher {
    /// Create a fetcher using link header pagination
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            pagination: PaginationConfig::default(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Set the pagination strategy
    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    /// Set the page cap
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// The underlying HTTP client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// GET every page of `path` and aggregate the result
    pub async fn fetch_all(
        &self,
        path: &str,
        query: &HashMap<String, String>,
    ) -> Result<ApiResponse> {
        let paginator = self.pagination.build();
        let mut tally = PageTally::default();
        let mut items: Vec<Value> = Vec::new();

        let mut url = path.to_string();
        let mut page_query = Some(paginator.first_query());

        loop {
            // A `next` link already carries the query
            let request = match page_query.take() {
                Some(extra) => RequestConfig::new().queries(query).queries(&extra),
                None => RequestConfig::new(),
            };

            let response = self.client.get_with_config(&url, request).await?;
            let headers = response.headers().clone();
            let text = self.client.read_text(Method::GET, response).await?;
            let page = match decode_body(&text) {
                Value::Array(page) => page,
                body if tally.pages == 0 => {
                    debug!("{path} returned a single object");
                    return Ok(ApiResponse::new(body));
                }
                _ => {
                    warn!(
                        "{path}: page {} is not a list, stopping pagination",
                        tally.pages + 1
                    );
                    break;
                }
            };

            let item_count = page.len();
            tally.record(item_count);
            items.extend(page);
            debug!(
                "{path}: page {} had {item_count} items ({} total)",
                tally.pages, tally.items
            );

            let next = paginator.next(&headers, item_count, &tally);
            if next.is_done() {
                break;
            }
            if tally.pages >= self.max_pages {
                warn!(
                    "{path}: stopping after {} pages (page cap reached)",
                    self.max_pages
                );
                break;
            }
            match next {
                NextPage::Url(next_url) => url = next_url,
                NextPage::Query(next_query) => page_query = Some(next_query),
                NextPage::Done => break,
            }
        }

        Ok(ApiResponse::new(Value::Array(items)))
    }
}
