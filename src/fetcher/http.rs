//! HTTP implementation of `ResourceFetcher` on top of `reqwest`.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::{FetchError, FetchedPage, ResourceFetcher};
use crate::config::ScanConfig;
use crate::utils::render_url;

/// Plain GET fetcher for a templated probe URL
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    url_template: String,
}

impl HttpFetcher {
    /// Build a fetcher with an identifying user agent and a fixed timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(url_template: impl Into<String>, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url_template: url_template.into(),
        })
    }

    /// Build a fetcher from the scan configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Self::new(
            config.url_template(),
            config.user_agent(),
            config.request_timeout(),
        )
    }

    /// GET the page for `identifier` and return it whatever its status.
    ///
    /// Used directly by the single-probe diagnostic, which wants to show
    /// non-200 answers instead of folding them into an error.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` on URL, network, timeout or body failures.
    pub async fn fetch_any_status(&self, identifier: u64) -> Result<FetchedPage, FetchError> {
        let url = render_url(&self.url_template, identifier)
            .map_err(|e| FetchError::InvalidUrl(format!("{e:#}")))?;

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(FetchedPage {
            identifier,
            status,
            body,
        })
    }
}

impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, identifier: u64) -> Result<FetchedPage, FetchError> {
        let page = self.fetch_any_status(identifier).await?;
        if page.status != 200 {
            return Err(FetchError::Status(page.status));
        }
        Ok(page)
    }
}
