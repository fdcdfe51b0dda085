//! Discogs API client implementing the outbound search call contract.
//!
//! The client owns a pooled HTTP connection and the injected credentials;
//! it never reads process environment or configuration files itself. Each
//! call receives a [`RequestToken`] and honors it cooperatively: the
//! request is raced against the token, and cancellation surfaces as the
//! distinguished [`SearchError::Cancelled`].

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::config::Credentials;

use super::error::SearchError;
use super::record::SearchPage;
use super::types::{RequestToken, SearchParams};

const API_BASE_URL: &str = "https://api.discogs.com";

/// HTTP client for the Discogs catalog.
#[derive(Clone)]
pub struct DiscogsClient {
    http: reqwest::Client,
    base_url: String,
}

impl DiscogsClient {
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &credentials.token {
            let mut value = HeaderValue::from_str(&format!("Discogs token={token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        } else {
            tracing::warn!("no Discogs token configured, requests will be rate limited");
        }

        let http = reqwest::Client::builder()
            .user_agent(credentials.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Run one catalog search.
    ///
    /// Rejects with [`SearchError::Cancelled`] as soon as the token is
    /// cancelled; any other failure (network, non-2xx status, malformed
    /// payload) maps to the matching [`SearchError`] variant.
    pub async fn search(
        &self,
        token: &RequestToken,
        params: &SearchParams,
    ) -> Result<SearchPage, SearchError> {
        let url = format!("{}/database/search", self.base_url);
        tracing::debug!(page = params.page, per_page = params.per_page, "API: database/search");

        let response = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(SearchError::Cancelled),
            response = self.http.get(&url).query(&params.to_query()).send() => response?,
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "catalog answered with an error status");
            return Err(SearchError::Status(status));
        }

        let body = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(SearchError::Cancelled),
            body = response.text() => body?,
        };

        let page: SearchPage = serde_json::from_str(&body)?;
        tracing::debug!(
            results = page.results.len(),
            pages = page.pagination.pages,
            items = page.pagination.items,
            "search page received"
        );
        Ok(page)
    }
}
